//! Toast notifications for load failures and other visitor-facing notices.
//!
//! A single manager lives in context; toasts dismiss themselves after a
//! timeout or on click.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Most toasts shown at once; the oldest is dropped beyond this
const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// 4 second duration
    Info,
    /// 7 second duration
    Critical,
}

impl ToastSeverity {
    fn duration_ms(self) -> u32 {
        match self {
            ToastSeverity::Info => 4000,
            ToastSeverity::Critical => 7000,
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast that dismisses itself after the severity's duration
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= MAX_TOASTS {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts_signal = self.toasts;
        spawn(async move {
            TimeoutFuture::new(severity.duration_ms()).await;
            toasts_signal.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Call once in the root component before any children that show toasts.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Renders all active toasts. Place once at the end of the root layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container", role: "status",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Info => "toast",
                        ToastSeverity::Critical => "toast toast-critical",
                    },
                    span { class: "toast-icon",
                        {match toast.severity {
                            ToastSeverity::Info => rsx! { i { class: "fa-solid fa-circle-info" } },
                            ToastSeverity::Critical => rsx! { i { class: "fa-solid fa-triangle-exclamation" } },
                        }}
                    }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        aria_label: "Dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        i { class: "fa-solid fa-xmark" }
                    }
                }
            }
        }
    }
}
