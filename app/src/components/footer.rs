use chrono::Datelike;
use dioxus::prelude::*;
use folio_types::Footer;

use crate::utils::formatting::format_copyright;
use crate::utils::icon_class;

/// Copyright line, falling back to the current year when the document has none
fn copyright_line(footer: &Footer) -> String {
    if footer.copyright.is_empty() {
        format_copyright(chrono::Local::now().year(), &footer.name)
    } else {
        footer.copyright.clone()
    }
}

#[component]
pub fn SiteFooter(footer: Footer) -> Element {
    let copyright = copyright_line(&footer);

    rsx! {
        footer { class: "footer",
            div { class: "container footer-inner",
                div {
                    p { class: "footer-name", "{footer.name}" }
                    if !footer.title.is_empty() {
                        p { class: "muted", "{footer.title}" }
                    }
                }
                div { class: "hero-social",
                    for link in footer.social.iter() {
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
                div { class: "footer-legal",
                    p { "{copyright}" }
                    if !footer.built_with.is_empty() {
                        p { class: "muted", "{footer.built_with}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_copyright_wins() {
        let footer = Footer {
            name: "Ada".into(),
            copyright: "© Ada".into(),
            ..Default::default()
        };
        assert_eq!(copyright_line(&footer), "© Ada");
    }

    #[test]
    fn test_copyright_fallback_uses_name() {
        let footer = Footer {
            name: "Ada".into(),
            ..Default::default()
        };
        let line = copyright_line(&footer);
        assert!(line.starts_with("© "));
        assert!(line.ends_with(" Ada. All rights reserved."));
    }
}
