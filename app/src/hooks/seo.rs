use dioxus::prelude::*;
use folio_core::seo::{MetaTag, MetaTags};
use serde_json::Value;
use web_sys::Document;

/// Keep `<title>`, the meta tags and the canonical link in sync with `meta`
pub fn use_meta_tags(meta: MetaTags) {
    use_effect(use_reactive!(|meta| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&meta.title);
            for tag in meta.tags() {
                upsert_meta(&document, &tag);
            }
            upsert_canonical(&document, meta.canonical_url());
        }
    }));
}

/// Inject a JSON-LD `<script>` with element id `id`; removed on unmount
pub fn use_json_ld(id: &'static str, schema: Value) {
    use_effect(use_reactive!(|schema| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            upsert_json_ld(&document, id, &schema);
        }
    }));

    use_drop(move || {
        if let Some(script) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            script.remove();
        }
    });
}

fn upsert_meta(document: &Document, tag: &MetaTag) {
    let attr = if tag.is_property { "property" } else { "name" };
    let selector = format!("meta[{}=\"{}\"]", attr, tag.key);

    let element = match document.query_selector(&selector) {
        Ok(Some(existing)) => existing,
        _ => {
            let Ok(created) = document.create_element("meta") else {
                return;
            };
            let _ = created.set_attribute(attr, tag.key);
            if let Some(head) = document.head() {
                let _ = head.append_child(&created);
            }
            created
        }
    };
    let _ = element.set_attribute("content", &tag.content);
}

fn upsert_canonical(document: &Document, url: &str) {
    let element = match document.query_selector("link[rel=\"canonical\"]") {
        Ok(Some(existing)) => existing,
        _ => {
            let Ok(created) = document.create_element("link") else {
                return;
            };
            let _ = created.set_attribute("rel", "canonical");
            if let Some(head) = document.head() {
                let _ = head.append_child(&created);
            }
            created
        }
    };
    let _ = element.set_attribute("href", url);
}

fn upsert_json_ld(document: &Document, id: &str, schema: &Value) {
    let element = match document.get_element_by_id(id) {
        Some(existing) => existing,
        None => {
            let Ok(created) = document.create_element("script") else {
                return;
            };
            created.set_id(id);
            let _ = created.set_attribute("type", "application/ld+json");
            if let Some(head) = document.head() {
                let _ = head.append_child(&created);
            }
            created
        }
    };
    element.set_text_content(Some(&schema.to_string()));
}
