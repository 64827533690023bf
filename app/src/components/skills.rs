use dioxus::prelude::*;
use folio_types::SkillCategory;

#[component]
pub fn SkillsSection(skills: Vec<SkillCategory>) -> Element {
    rsx! {
        section { id: "skills", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Skills" }
                div { class: "card-grid",
                    for category in skills.iter() {
                        div { key: "{category.title}", class: "card",
                            h3 { class: "card-title", "{category.title}" }
                            div { class: "badge-list",
                                for skill in category.skills.iter() {
                                    span { key: "{skill}", class: "badge", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
