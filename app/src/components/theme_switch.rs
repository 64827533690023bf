use dioxus::prelude::*;
use folio_core::Theme;

use crate::hooks::use_theme;

/// Palette button with a dropdown of the selectable themes
#[component]
pub fn ThemeSwitch() -> Element {
    let mut theme = use_theme();
    let mut open = use_signal(|| false);
    let current = theme.get();

    rsx! {
        div { class: "theme-switch",
            button {
                class: "btn btn-outline btn-sm",
                aria_label: "Toggle theme",
                aria_expanded: "{open()}",
                onclick: move |_| open.set(!open()),
                i { class: "fa-solid fa-palette" }
            }
            if open() {
                ul { class: "theme-menu", role: "menu",
                    for option in Theme::PICKER {
                        li {
                            key: "{option}",
                            role: "menuitem",
                            class: "theme-option",
                            onclick: move |_| {
                                theme.set(option);
                                open.set(false);
                            },
                            span { class: "theme-swatch {option.swatch_class()}" }
                            span {
                                class: if option == current { "theme-name active" } else { "theme-name" },
                                "{option.display_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
