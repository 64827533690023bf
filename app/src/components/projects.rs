use dioxus::prelude::*;
use folio_types::Project;

/// Rendered only when the document lists at least one project
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "card-grid",
                    for project in projects.iter() {
                        div { key: "{project.title}", class: "card project-card",
                            div { class: "project-header",
                                h3 { class: "card-title", "{project.title}" }
                                if !project.kind.is_empty() {
                                    span { class: "badge", "{project.kind}" }
                                }
                            }
                            if !project.period.is_empty() {
                                p { class: "muted", "{project.period}" }
                            }
                            p { "{project.description}" }
                            if !project.highlights.is_empty() {
                                ul { class: "bullet-list",
                                    for (i, highlight) in project.highlights.iter().enumerate() {
                                        li { key: "{i}", "{highlight}" }
                                    }
                                }
                            }
                            div { class: "badge-list",
                                for tech in project.technologies.iter() {
                                    span { key: "{tech}", class: "badge badge-outline", "{tech}" }
                                }
                            }
                            if let Some(links) = project.links.as_ref().filter(|l| !l.is_empty()) {
                                div { class: "project-links",
                                    if let Some(github) = &links.github {
                                        a {
                                            class: "btn btn-ghost btn-sm",
                                            href: "{github}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            i { class: "fa-brands fa-github" }
                                            " Source"
                                        }
                                    }
                                    if let Some(npm) = &links.npm {
                                        a {
                                            class: "btn btn-ghost btn-sm",
                                            href: "{npm}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            i { class: "fa-brands fa-npm" }
                                            " Package"
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
}
