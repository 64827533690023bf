//! Host for the seasonal canvas effect and its floating toggle
//!
//! Picks the first active effect for today's date, mounts [`EffectCanvas`]
//! while the visitor has it enabled and shows a toggle button for a few
//! seconds after the effect starts or the page scrolls.

use std::rc::Rc;

use chrono::Local;
use dioxus::prelude::*;
use folio_core::select_active;
use folio_core::toggle::{HIDE_DELAY_MS, ToggleButton};
use folio_types::SeasonalEffectsConfig;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::canvas::EffectCanvas;
use crate::utils::{EventListener, now_ms};

/// Hide the button at `deadline` unless a later show superseded it
fn schedule_hide(mut button: Signal<ToggleButton>, deadline: f64) {
    // Runs outside the component scope so it can be armed from DOM listeners
    spawn_local(async move {
        TimeoutFuture::new(HIDE_DELAY_MS as u32).await;
        let _ = button.try_write().map(|mut b| b.expire(deadline));
    });
}

#[component]
pub fn SeasonalEffects(config: SeasonalEffectsConfig) -> Element {
    let mut enabled = use_signal(|| config.enabled);
    let toggle = use_signal(ToggleButton::new);

    let active = use_memo(use_reactive!(|config| {
        select_active(&config.effects, &Local::now().date_naive()).cloned()
    }));

    use_effect(move || {
        let has_effect = active.read().is_some();
        let on = enabled();
        let mut toggle = toggle;
        let deadline = toggle.write().sync(has_effect, on, now_ms());
        if let Some(deadline) = deadline {
            schedule_hide(toggle, deadline);
        }
    });

    let _scroll = use_hook(|| {
        Rc::new(EventListener::window("scroll", move |_| {
            let mut toggle = toggle;
            let deadline = toggle
                .try_write()
                .ok()
                .and_then(|mut b| b.on_scroll(now_ms()));
            if let Some(deadline) = deadline {
                schedule_hide(toggle, deadline);
            }
        }))
    });

    let Some(effect) = active() else {
        return rsx! {};
    };
    let is_on = enabled();
    let title = ToggleButton::title(is_on);

    rsx! {
        if is_on {
            EffectCanvas { key: "{effect.name}", effect: effect.clone() }
        }
        if toggle.read().is_visible() {
            button {
                class: "seasonal-toggle",
                title: title,
                aria_label: title,
                onclick: move |_| {
                    tracing::info!(enabled = !is_on, "Seasonal effect toggled");
                    enabled.set(!is_on);
                },
                if is_on {
                    i { class: "fa-solid fa-eye-slash" }
                } else {
                    i { class: "fa-solid fa-snowflake" }
                }
            }
        }
    }
}
