//! Shared state and document-level side effects

mod portfolio;
mod seo;
mod theme;

pub use portfolio::{loaded_config, use_portfolio, use_portfolio_provider};
pub use seo::{use_json_ld, use_meta_tags};
pub use theme::{use_theme, use_theme_provider};
