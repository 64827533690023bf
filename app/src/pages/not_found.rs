use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(path = %path, "No route matched");

    rsx! {
        div { class: "container page-status",
            h1 { class: "status-code", "404" }
            p { "Page not found: " code { "{path}" } }
            Link { class: "btn btn-primary", to: Route::Index {}, "Back to home" }
        }
    }
}
