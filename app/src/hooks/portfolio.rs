use dioxus::prelude::*;
use folio_types::PortfolioConfig;

use crate::api;

/// The portfolio document, fetched once per app instance
pub type PortfolioResource = Resource<Result<PortfolioConfig, String>>;

/// Start the fetch at the app root and share it through context
pub fn use_portfolio_provider() -> PortfolioResource {
    let resource = use_resource(api::load_portfolio);
    use_context_provider(|| resource)
}

pub fn use_portfolio() -> PortfolioResource {
    use_context::<PortfolioResource>()
}

/// The document if it has loaded successfully
pub fn loaded_config(resource: &PortfolioResource) -> Option<PortfolioConfig> {
    match &*resource.read() {
        Some(Ok(config)) => Some(config.clone()),
        _ => None,
    }
}
