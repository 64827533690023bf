use dioxus::prelude::*;
use folio_types::ContactSection;

use crate::utils::{icon_class, is_external};

#[component]
pub fn ContactSectionView(contact: ContactSection) -> Element {
    let heading = if contact.heading.is_empty() {
        "Get In Touch".to_string()
    } else {
        contact.heading.clone()
    };

    rsx! {
        section { id: "contact", class: "section",
            div { class: "container",
                h2 { class: "section-title", "{heading}" }
                if !contact.description.is_empty() {
                    p { class: "section-lead", "{contact.description}" }
                }

                div { class: "card-grid",
                    for info in contact.info.iter() {
                        div { key: "{info.label}", class: "card contact-card",
                            i { class: "contact-icon {icon_class(&info.icon)}" }
                            div {
                                p { class: "card-subtitle", "{info.label}" }
                                {match &info.link {
                                    Some(link) => rsx! {
                                        a { href: "{link}", "{info.value}" }
                                    },
                                    None => rsx! {
                                        span { "{info.value}" }
                                    },
                                }}
                            }
                        }
                    }
                }

                div { class: "contact-social",
                    for social in contact.social.iter() {
                        a {
                            key: "{social.url}",
                            class: "card contact-card",
                            href: "{social.url}",
                            target: if is_external(&social.url) { "_blank" } else { "_self" },
                            rel: "noopener noreferrer",
                            i { class: "contact-icon {icon_class(&social.icon)}" }
                            div {
                                p { class: "card-subtitle", "{social.label}" }
                                span { "{social.username}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
