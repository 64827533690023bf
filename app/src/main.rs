//! Portfolio site front end
//!
//! Client-rendered Dioxus app: home page sections from the portfolio
//! document, an embedded markdown blog, themes and a date-based seasonal
//! canvas effect.

mod api;
mod blogs;
mod canvas;
mod components;
mod hooks;
mod pages;
mod utils;

use dioxus::prelude::*;
use tracing::Level;

use components::{SeasonalEffects, ToastFrame, ToastSeverity, use_toast_provider};
use hooks::{loaded_config, use_portfolio_provider, use_theme_provider};
use pages::{BlogDetail, BlogList, Index, NotFound, Shell};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const HIGHLIGHT_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Index {},
        #[route("/blogs")]
        BlogList {},
        #[route("/blogs/:slug")]
        BlogDetail { slug: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Fails only if a logger is already installed
    if let Err(e) = dioxus_logger::init(level) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting portfolio");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut toasts = use_toast_provider();
    use_theme_provider();
    let portfolio = use_portfolio_provider();

    use_effect(move || {
        if let Some(Err(e)) = &*portfolio.read() {
            toasts.show(format!("Could not load portfolio: {}", e), ToastSeverity::Critical);
        }
    });

    let seasonal = loaded_config(&portfolio).map(|c| c.seasonal_effects);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        document::Script { src: HIGHLIGHT_JS }

        Router::<Route> {}

        if let Some(config) = seasonal {
            SeasonalEffects { config }
        }
        ToastFrame {}
    }
}
