use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::config::NAV_SCROLL_THRESHOLD;
use folio_types::NavItem;
use gloo_timers::future::TimeoutFuture;

use super::ThemeSwitch;
use crate::Route;
use crate::utils::{EventListener, scroll_to_section, window_scroll_y};

/// Delay before scrolling when the target section is on another page
const CROSS_PAGE_SCROLL_DELAY_MS: u32 = 150;

#[derive(Props, Clone, PartialEq)]
pub struct NavigationProps {
    pub items: Vec<NavItem>,
    /// Short brand text on the left, e.g. initials
    pub brand: String,
}

#[component]
pub fn Navigation(props: NavigationProps) -> Element {
    let mut is_scrolled = use_signal(|| window_scroll_y() > NAV_SCROLL_THRESHOLD);
    let mut menu_open = use_signal(|| false);
    let navigator = use_navigator();

    let _scroll = use_hook(|| {
        Rc::new(EventListener::window("scroll", move |_| {
            let scrolled = window_scroll_y() > NAV_SCROLL_THRESHOLD;
            let changed = is_scrolled
                .try_peek()
                .map(|current| *current != scrolled)
                .unwrap_or(false);
            if changed {
                let _ = is_scrolled.try_write().map(|mut w| *w = scrolled);
            }
        }))
    });

    // Scroll to a home page section, navigating home first when needed
    let mut go_to = move |id: String| {
        menu_open.set(false);
        if !scroll_to_section(&id) {
            navigator.push(Route::Index {});
            spawn(async move {
                TimeoutFuture::new(CROSS_PAGE_SCROLL_DELAY_MS).await;
                scroll_to_section(&id);
            });
        }
    };

    let nav_class = if is_scrolled() { "navbar scrolled" } else { "navbar" };

    rsx! {
        nav { class: nav_class,
            div { class: "container navbar-inner",
                Link { class: "navbar-brand", to: Route::Index {}, "{props.brand}" }

                div { class: "navbar-links",
                    for item in props.items.iter().cloned() {
                        button {
                            key: "{item.id}",
                            class: "nav-link",
                            onclick: {
                                let id = item.id.clone();
                                move |_| go_to(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                    Link { class: "nav-link", to: Route::BlogList {}, "Blog" }
                    div { class: "navbar-actions",
                        ThemeSwitch {}
                        button {
                            class: "btn btn-outline btn-sm",
                            onclick: move |_| go_to("contact".to_string()),
                            "Hire Me"
                        }
                    }
                }

                div { class: "navbar-mobile-toggle",
                    ThemeSwitch {}
                    button {
                        class: "btn btn-ghost btn-sm",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() {
                            i { class: "fa-solid fa-xmark" }
                        } else {
                            i { class: "fa-solid fa-bars" }
                        }
                    }
                }
            }

            if menu_open() {
                div { class: "navbar-mobile-menu container",
                    for item in props.items.iter().cloned() {
                        button {
                            key: "mobile-{item.id}",
                            class: "nav-link",
                            onclick: {
                                let id = item.id.clone();
                                move |_| go_to(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                    Link {
                        class: "nav-link",
                        to: Route::BlogList {},
                        onclick: move |_| menu_open.set(false),
                        "Blog"
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| go_to("contact".to_string()),
                        "Hire Me"
                    }
                }
            }
        }
    }
}
