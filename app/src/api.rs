//! Static asset fetching
//!
//! The site has no backend. The only runtime request is the portfolio
//! document; everything else is compiled in.

use folio_core::{CONFIG_PATH, parse_portfolio};
use folio_types::PortfolioConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Extract a readable message from a rejected promise
fn js_error(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET `path` and return the body as text
pub async fn fetch_text(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;

    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(|_| "fetch did not return a Response")?;

    if !response.ok() {
        return Err(format!("{} returned HTTP {}", path, response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string().ok_or_else(|| format!("{} body is not text", path))
}

/// Fetch and parse the portfolio document
pub async fn load_portfolio() -> Result<PortfolioConfig, String> {
    let body = fetch_text(CONFIG_PATH).await.inspect_err(|e| {
        tracing::error!(path = CONFIG_PATH, error = %e, "Failed to fetch portfolio config");
    })?;

    parse_portfolio(&body).map_err(|e| {
        tracing::error!(path = CONFIG_PATH, error = %e, "Failed to parse portfolio config");
        e.to_string()
    })
}
