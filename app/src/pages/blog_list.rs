use dioxus::prelude::*;
use folio_core::seo::{MetaTags, breadcrumb_schema};
use folio_core::{BlogFilter, BlogPost};

use crate::Route;
use crate::blogs::catalog;
use crate::hooks::{loaded_config, use_json_ld, use_meta_tags, use_portfolio};
use crate::utils::formatting::{format_reading_time, format_results_count, format_short_date};

/// Card date, e.g. "11/23/2025"; the raw front matter text when unparsable
fn card_date(post: &BlogPost) -> String {
    use chrono::Datelike;
    match post.published_on() {
        Some(d) => format_short_date(d.year(), d.month(), d.day()),
        None => post.date.clone(),
    }
}

#[component]
pub fn BlogList() -> Element {
    let mut filter = use_signal(BlogFilter::new);
    let portfolio = use_portfolio();
    let catalog = catalog();

    let meta = loaded_config(&portfolio)
        .map(|c| MetaTags::from_config(&c.seo))
        .unwrap_or_default()
        .for_page("Blog", "Notes and articles");
    let breadcrumbs = breadcrumb_schema(&[("Home", "/"), ("Blog", "/blogs")]);
    use_meta_tags(meta);
    use_json_ld("blog-breadcrumb-schema", breadcrumbs);

    let current = filter.read().clone();
    let visible = current.apply(catalog.posts());
    let counter = format_results_count(visible.len(), catalog.len());

    rsx! {
        section { class: "section blog-list",
            div { class: "container",
                h1 { class: "section-title", "Blog" }

                div { class: "blog-search",
                    i { class: "fa-solid fa-magnifying-glass" }
                    input {
                        r#type: "search",
                        class: "input",
                        placeholder: "Search blogs...",
                        value: "{current.query}",
                        oninput: move |e| filter.write().set_query(e.value()),
                    }
                }

                div { class: "badge-list tag-filter",
                    for tag in catalog.all_tags() {
                        button {
                            key: "{tag}",
                            class: if current.is_selected(tag) { "badge badge-selected" } else { "badge badge-outline" },
                            onclick: move |_| filter.write().toggle_tag(tag),
                            "{tag}"
                        }
                    }
                    if current.is_active() {
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| filter.write().clear(),
                            "Clear filters"
                        }
                    }
                }

                p { class: "muted results-count", "{counter}" }

                if visible.is_empty() {
                    div { class: "page-status",
                        p { "No blogs found matching your criteria." }
                    }
                } else {
                    div { class: "card-grid",
                        for post in visible.iter() {
                            Link {
                                key: "{post.slug}",
                                class: "card blog-card",
                                to: Route::BlogDetail { slug: post.slug.clone() },
                                h2 { class: "card-title", "{post.title}" }
                                div { class: "blog-meta",
                                    span {
                                        i { class: "fa-regular fa-calendar" }
                                        " {card_date(post)}"
                                    }
                                    span {
                                        i { class: "fa-regular fa-clock" }
                                        " {format_reading_time(post.reading_minutes())}"
                                    }
                                }
                                if !post.summary.is_empty() {
                                    p { class: "blog-summary", "{post.summary}" }
                                }
                                div { class: "badge-list",
                                    for tag in post.tags.iter() {
                                        span { key: "{tag}", class: "badge", "{tag}" }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: &str) -> BlogPost {
        BlogPost {
            slug: "p".into(),
            title: "P".into(),
            date: date.into(),
            summary: String::new(),
            tags: vec![],
            body: String::new(),
        }
    }

    #[test]
    fn test_card_date() {
        assert_eq!(card_date(&post("2025-11-23")), "11/23/2025");
        assert_eq!(card_date(&post("someday")), "someday");
    }
}
