//! Routed pages and the shared layout around them

mod blog_detail;
mod blog_list;
mod index;
mod not_found;

pub use blog_detail::BlogDetail;
pub use blog_list::BlogList;
pub use index::Index;
pub use not_found::NotFound;

use dioxus::prelude::*;
use folio_core::config::{default_navigation, navigation_items};

use crate::Route;
use crate::components::{Navigation, SiteFooter};
use crate::hooks::{loaded_config, use_portfolio};
use crate::utils::scroll_to_top;

/// Initials shown as the navigation brand, e.g. "AL" for "Ada Lovelace"
fn brand_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "Portfolio".to_string()
    } else {
        initials
    }
}

/// Navigation bar, routed page, footer. Scrolls to the top on every route
/// change.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let portfolio = use_portfolio();
    let config = loaded_config(&portfolio);

    use_effect(use_reactive!(|route| {
        tracing::debug!(route = %route, "Route changed");
        scroll_to_top();
    }));

    let (items, brand, footer) = match &config {
        Some(config) => (
            navigation_items(config),
            brand_initials(&config.hero.name),
            config.footer.clone(),
        ),
        None => (default_navigation(), brand_initials(""), Default::default()),
    };

    rsx! {
        Navigation { items, brand }
        main { class: "page",
            Outlet::<Route> {}
        }
        SiteFooter { footer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_initials() {
        assert_eq!(brand_initials("Ada Lovelace"), "AL");
        assert_eq!(brand_initials("  grace  hopper "), "GH");
        assert_eq!(brand_initials(""), "Portfolio");
    }
}
