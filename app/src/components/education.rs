use dioxus::prelude::*;
use folio_types::Education;

#[component]
pub fn EducationSection(education: Education) -> Element {
    rsx! {
        section { id: "education", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Education" }
                div { class: "card-grid",
                    for degree in education.degrees.iter() {
                        div { key: "{degree.degree}-{degree.institution}", class: "card",
                            h3 { class: "card-title", "{degree.degree}" }
                            p { class: "card-subtitle", "{degree.institution}" }
                            div { class: "timeline-meta",
                                span { "{degree.period}" }
                                if !degree.kind.is_empty() {
                                    span { class: "badge", "{degree.kind}" }
                                }
                            }
                        }
                    }
                }

                if !education.certifications.is_empty() {
                    h3 { class: "subsection-title", "Certifications" }
                    div { class: "card-grid",
                        for cert in education.certifications.iter() {
                            div { key: "{cert.title}", class: "card",
                                h4 { class: "card-title", "{cert.title}" }
                                p { class: "card-subtitle", "{cert.provider}" }
                                p { class: "muted", "{cert.date}" }
                                if let Some(link) = &cert.link {
                                    a {
                                        class: "btn btn-ghost btn-sm",
                                        href: "{link}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "View credential"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
