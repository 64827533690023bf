use dioxus::prelude::*;
use folio_types::ExperienceEntry;

#[component]
pub fn ExperienceSection(experience: Vec<ExperienceEntry>) -> Element {
    rsx! {
        section { id: "experience", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Experience" }
                div { class: "timeline",
                    for (idx, entry) in experience.iter().enumerate() {
                        div { key: "{idx}", class: "card timeline-entry",
                            div { class: "timeline-header",
                                div {
                                    h3 { class: "card-title", "{entry.role}" }
                                    p { class: "card-subtitle", "{entry.company}" }
                                }
                                div { class: "timeline-meta",
                                    span { "{entry.period}" }
                                    if !entry.location.is_empty() {
                                        span { class: "muted", "{entry.location}" }
                                    }
                                }
                            }
                            ul { class: "bullet-list",
                                for (i, point) in entry.description.iter().enumerate() {
                                    li { key: "{i}", "{point}" }
                                }
                            }
                            div { class: "badge-list",
                                for tech in entry.technologies.iter() {
                                    span { key: "{tech}", class: "badge badge-outline", "{tech}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
