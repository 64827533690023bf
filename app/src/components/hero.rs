use dioxus::prelude::*;
use folio_types::Hero;

use crate::utils::{icon_class, scroll_to_section};

#[component]
pub fn HeroSection(hero: Hero) -> Element {
    let location = hero.contact.location.clone();
    let phone = hero.contact.phone.clone();

    rsx! {
        section { id: "hero", class: "section hero",
            div { class: "container hero-inner",
                h1 { class: "hero-name", "{hero.name}" }
                p { class: "hero-title", "{hero.title}" }
                p { class: "hero-description", "{hero.description}" }

                div { class: "hero-meta",
                    if !location.is_empty() {
                        span { class: "hero-meta-item",
                            i { class: icon_class("location") }
                            " {location}"
                        }
                    }
                    if !phone.is_empty() {
                        span { class: "hero-meta-item",
                            i { class: icon_class("phone") }
                            " {phone}"
                        }
                    }
                }

                div { class: "hero-actions",
                    if !hero.cta_primary.is_empty() {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                scroll_to_section("contact");
                            },
                            "{hero.cta_primary}"
                        }
                    }
                    if !hero.cta_secondary.is_empty() {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| {
                                scroll_to_section("projects");
                            },
                            "{hero.cta_secondary}"
                        }
                    }
                }

                div { class: "hero-social",
                    for link in hero.social.iter() {
                        a {
                            key: "{link.url}",
                            class: "social-link",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "{link.name}",
                            i { class: icon_class(&link.name) }
                        }
                    }
                }
            }
        }
    }
}
