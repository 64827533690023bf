use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::blog::{ANCHOR_LINK_CLASS, highlight_theme, render_markdown};
use folio_core::seo::{MetaTags, article_schema};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::Route;
use crate::blogs::catalog;
use crate::hooks::{loaded_config, use_json_ld, use_meta_tags, use_portfolio, use_theme};
use crate::utils::formatting::{format_long_date, format_reading_time};
use crate::utils::{EventListener, scroll_to_section};

const CONTENT_ID: &str = "post-content";
const HIGHLIGHT_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles";

/// Run highlight.js over the rendered post, if the script has loaded
fn highlight_code_blocks() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(hljs) = js_sys::Reflect::get(&window, &JsValue::from_str("hljs")) else {
        return;
    };
    if hljs.is_undefined() {
        tracing::debug!("highlight.js not loaded, code blocks left plain");
        return;
    }
    if let Ok(func) = js_sys::Reflect::get(&hljs, &JsValue::from_str("highlightAll"))
        && let Some(func) = func.dyn_ref::<js_sys::Function>()
        && let Err(e) = func.call0(&hljs)
    {
        tracing::warn!(error = ?e, "highlight.js failed");
    }
}

/// Intercept clicks on in-page anchors inside the post and smooth-scroll
/// to the heading instead of changing the URL
fn attach_anchor_scroll() -> Option<EventListener> {
    let container = web_sys::window()?.document()?.get_element_by_id(CONTENT_ID)?;
    let selector = format!("a.{}", ANCHOR_LINK_CLASS);

    EventListener::new(container.into(), "click", move |event| {
        let anchor = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten());
        if let Some(anchor) = anchor
            && let Some(id) = anchor.get_attribute("data-anchor")
        {
            event.prevent_default();
            if !scroll_to_section(&id) {
                tracing::debug!(id = %id, "Anchor target not found");
            }
        }
    })
}

#[component]
pub fn BlogDetail(slug: String) -> Element {
    let post = catalog().by_slug(&slug);
    let theme = use_theme();
    let portfolio = use_portfolio();
    let mut anchors = use_signal(|| None::<EventListener>);

    let html = use_memo(use_reactive!(|slug| {
        catalog()
            .by_slug(&slug)
            .map(|p| render_markdown(&p.body))
            .unwrap_or_default()
    }));

    let base = loaded_config(&portfolio)
        .map(|c| MetaTags::from_config(&c.seo))
        .unwrap_or_default();
    let (meta, schema) = match post {
        Some(p) => (
            base.for_page(&p.title, &p.summary),
            article_schema(&p.title, &p.summary, &p.date, &p.tags),
        ),
        None => (
            base.for_page("Blog not found", ""),
            article_schema("Blog not found", "", "", &[]),
        ),
    };
    use_meta_tags(meta);
    use_json_ld("article-schema", schema);

    // Re-run after the rendered HTML changes
    use_effect(move || {
        let _ = html.read();
        highlight_code_blocks();
        anchors.set(attach_anchor_scroll());
    });

    use_drop(move || {
        if let Ok(mut slot) = anchors.try_write() {
            slot.take();
        }
    });

    let Some(post) = post else {
        tracing::warn!(slug = %slug, "Unknown blog slug");
        return rsx! {
            div { class: "container page-status",
                h1 { "Blog not found" }
                p { class: "muted", "No post is published under \"{slug}\"." }
                Link { class: "btn btn-primary", to: Route::BlogList {}, "Back to blogs" }
            }
        };
    };

    let date = post
        .published_on()
        .map(|d| format_long_date(d.year(), d.month(), d.day()))
        .unwrap_or_else(|| post.date.clone());
    let reading = format_reading_time(post.reading_minutes());
    let stylesheet = format!("{}/{}.min.css", HIGHLIGHT_CDN, highlight_theme(theme.get()));

    rsx! {
        document::Link { rel: "stylesheet", href: stylesheet }
        article { class: "section blog-detail",
            div { class: "container container-narrow",
                Link { class: "btn btn-ghost btn-sm back-link", to: Route::BlogList {},
                    i { class: "fa-solid fa-arrow-left" }
                    " Back to blogs"
                }
                header { class: "blog-header",
                    h1 { class: "blog-title", "{post.title}" }
                    div { class: "blog-meta",
                        span {
                            i { class: "fa-regular fa-calendar" }
                            " {date}"
                        }
                        span {
                            i { class: "fa-regular fa-clock" }
                            " {reading}"
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
                div {
                    id: CONTENT_ID,
                    class: "markdown-body",
                    dangerous_inner_html: "{html}",
                }
            }
        }
    }
}
