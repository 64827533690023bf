//! Portfolio document loading
//!
//! The document is fetched from [`CONFIG_PATH`] by the front end and parsed
//! here. Every section is optional; absent sections render as empty.

use folio_types::{NavItem, PortfolioConfig};

use crate::error::ConfigError;

/// Path the front end fetches the document from
pub const CONFIG_PATH: &str = "/config/portfolio.json";

/// Scroll offset in px after which the navigation bar switches to its
/// compact, opaque style
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Parse the portfolio document
pub fn parse_portfolio(json: &str) -> Result<PortfolioConfig, ConfigError> {
    let config: PortfolioConfig = serde_json::from_str(json)?;
    tracing::debug!(
        skills = config.skills.len(),
        experience = config.experience.len(),
        projects = config.projects.len(),
        effects = config.seasonal_effects.effects.len(),
        "Portfolio config parsed"
    );
    Ok(config)
}

/// Built-in navigation used when the document has none
pub fn default_navigation() -> Vec<NavItem> {
    [
        ("Home", "hero"),
        ("Skills", "skills"),
        ("Experience", "experience"),
        ("Projects", "projects"),
        ("Education", "education"),
        ("Contact", "contact"),
    ]
    .into_iter()
    .map(|(label, id)| NavItem::new(label, id))
    .collect()
}

/// Navigation entries to render
pub fn navigation_items(config: &PortfolioConfig) -> Vec<NavItem> {
    if config.navigation.is_empty() {
        default_navigation()
    } else {
        config.navigation.clone()
    }
}

/// The projects section is only rendered when there is something to show
pub fn has_projects(config: &PortfolioConfig) -> bool {
    !config.projects.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::EffectKind;

    #[test]
    fn test_empty_document() {
        let config = parse_portfolio("{}").unwrap();
        assert!(!has_projects(&config));
        assert!(config.seasonal_effects.enabled);

        let nav = navigation_items(&config);
        let ids: Vec<_> = nav.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "skills", "experience", "projects", "education", "contact"]);
        assert_eq!(nav[0].label, "Home");
    }

    #[test]
    fn test_configured_navigation_wins() {
        let config =
            parse_portfolio(r#"{ "navigation": [{ "label": "About", "id": "hero" }] }"#).unwrap();
        assert_eq!(navigation_items(&config), vec![NavItem::new("About", "hero")]);
    }

    #[test]
    fn test_seasonal_catalog() {
        let json = r##"{
            "projects": [{ "title": "Engine" }],
            "seasonalEffects": {
                "enabled": false,
                "effects": [{
                    "name": "winter",
                    "type": "snow",
                    "startMonth": 12, "startDay": 1, "endMonth": 12, "endDay": 31,
                    "settings": { "particleCount": 80, "fallSpeed": "3s-9s" }
                }]
            }
        }"##;
        let config = parse_portfolio(json).unwrap();
        assert!(has_projects(&config));
        assert!(!config.seasonal_effects.enabled);
        let effect = &config.seasonal_effects.effects[0];
        assert_eq!(effect.kind, EffectKind::Fall);
        assert!(effect.enabled);
    }

    #[test]
    fn test_bad_effect_does_not_break_document() {
        let json = r##"{
            "hero": { "name": "Dev" },
            "seasonalEffects": {
                "effects": [
                    { "name": "fireworks", "type": "fireworks",
                      "startMonth": 12, "startDay": 31, "endMonth": 1, "endDay": 1 },
                    { "name": "winter", "type": "snow",
                      "startMonth": "12", "startDay": 1, "endMonth": 12, "endDay": 31 },
                    { "name": "newyear", "type": "crackers",
                      "startMonth": 12, "startDay": 31, "endMonth": 1, "endDay": 2 }
                ]
            }
        }"##;
        let config = parse_portfolio(json).unwrap();
        assert_eq!(config.hero.name, "Dev");
        let names: Vec<_> = config
            .seasonal_effects
            .effects
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["newyear"]);
        assert_eq!(config.seasonal_effects.effects[0].kind, EffectKind::Burst);
    }

    #[test]
    fn test_parse_error_reports_position() {
        let err = parse_portfolio("{\n  \"hero\": [\n").unwrap_err();
        let ConfigError::Parse { line, .. } = err;
        assert!(line >= 2);
        assert!(err_message("{ nope").contains("failed to parse portfolio config"));
    }

    fn err_message(json: &str) -> String {
        parse_portfolio(json).unwrap_err().to_string()
    }
}
