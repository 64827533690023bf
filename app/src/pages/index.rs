use dioxus::prelude::*;
use folio_core::config::has_projects;
use folio_core::seo::{MetaTags, breadcrumb_schema};

use crate::components::{
    ContactSectionView, EducationSection, ExperienceSection, HeroSection, ProjectsSection,
    SkillsSection,
};
use crate::hooks::{use_json_ld, use_meta_tags, use_portfolio};

/// Home page: every section of the portfolio document in order
#[component]
pub fn Index() -> Element {
    let portfolio = use_portfolio();

    let meta = match &*portfolio.read() {
        Some(Ok(config)) => MetaTags::from_config(&config.seo),
        _ => MetaTags::default(),
    };
    let breadcrumbs = breadcrumb_schema(&[("Home", meta.canonical_url())]);
    use_meta_tags(meta);
    use_json_ld("home-breadcrumb-schema", breadcrumbs);

    match &*portfolio.read() {
        None => rsx! {
            div { class: "page-status",
                i { class: "fa-solid fa-spinner fa-spin" }
                p { "Loading..." }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "page-status page-error",
                h2 { "Could not load the portfolio" }
                p { class: "muted", "{e}" }
            }
        },
        Some(Ok(config)) => rsx! {
            HeroSection { hero: config.hero.clone() }
            SkillsSection { skills: config.skills.clone() }
            ExperienceSection { experience: config.experience.clone() }
            if has_projects(config) {
                ProjectsSection { projects: config.projects.clone() }
            }
            EducationSection { education: config.education.clone() }
            ContactSectionView { contact: config.contact.clone() }
        },
    }
}
