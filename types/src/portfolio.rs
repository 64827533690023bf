//! Portfolio document types
//!
//! One struct per page section. All of them are `#[serde(default)]` so the
//! site degrades to empty sections instead of failing on a missing key.

use serde::{Deserialize, Serialize};

use crate::seasonal::{EffectDefinition, lenient_effects};

/// Root of `/config/portfolio.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub hero: Hero,
    pub navigation: Vec<NavItem>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub education: Education,
    pub contact: ContactSection,
    pub footer: Footer,
    pub seo: SeoConfig,
    pub seasonal_effects: SeasonalEffectsConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// Hero & Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Label of the primary call to action (scrolls to contact)
    pub cta_primary: String,
    /// Label of the secondary call to action (scrolls to projects)
    pub cta_secondary: String,
    pub contact: HeroContact,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContact {
    pub location: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// A navigation entry; `id` is the DOM id of the target section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub label: String,
    pub id: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills, Experience, Projects
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    /// Bullet points
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
    /// Free-form badge, e.g. "Open Source" or "Enterprise"
    #[serde(rename = "type")]
    pub kind: String,
    pub links: Option<ProjectLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub npm: Option<String>,
    pub github: Option<String>,
}

impl ProjectLinks {
    pub fn is_empty(&self) -> bool {
        self.npm.is_none() && self.github.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Education
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degrees: Vec<Degree>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Degree {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub title: String,
    pub provider: String,
    pub date: String,
    pub link: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact & Footer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub heading: String,
    pub description: String,
    pub info: Vec<ContactInfo>,
    pub social: Vec<ContactSocial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    /// `mailto:` / `tel:` link; plain text card when absent
    pub link: Option<String>,
    /// Icon key, e.g. "mail", "phone", "mapPin"
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSocial {
    pub label: String,
    pub username: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub name: String,
    pub title: String,
    pub copyright: String,
    pub built_with: String,
    pub social: Vec<SocialLink>,
}

// ─────────────────────────────────────────────────────────────────────────────
// SEO & Seasonal Effects
// ─────────────────────────────────────────────────────────────────────────────

/// Per-site overrides for meta tags. Unset fields keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub twitter_handle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalEffectsConfig {
    /// Initial state of the visitor-facing toggle
    pub enabled: bool,
    /// Ordered catalog; the first active entry wins. Malformed entries are
    /// dropped instead of failing the whole document.
    #[serde(deserialize_with = "lenient_effects")]
    pub effects: Vec<EffectDefinition>,
}

impl Default for SeasonalEffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            effects: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EffectKind;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: PortfolioConfig = serde_json::from_str("{}").unwrap();
        assert!(config.navigation.is_empty());
        assert!(config.projects.is_empty());
        assert!(config.seasonal_effects.enabled);
        assert!(config.seasonal_effects.effects.is_empty());
    }

    #[test]
    fn test_parse_sections() {
        let json = r#"{
            "hero": {
                "name": "Ada Lovelace",
                "title": "Engineer",
                "ctaPrimary": "Get In Touch",
                "contact": { "location": "London" },
                "social": [{ "name": "GitHub", "url": "https://github.com/ada" }]
            },
            "projects": [{
                "title": "Engine",
                "type": "Open Source",
                "links": { "github": "https://github.com/ada/engine" }
            }],
            "education": {
                "degrees": [{ "degree": "BSc", "institution": "UCL", "type": "Bachelor" }]
            },
            "footer": { "builtWith": "Rust & Dioxus" },
            "seo": { "title": "Ada", "twitterHandle": "@ada" },
            "seasonalEffects": {
                "enabled": false,
                "effects": [{
                    "name": "winter", "type": "snow",
                    "startMonth": 12, "startDay": 1, "endMonth": 12, "endDay": 31
                }]
            }
        }"#;

        let config: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hero.cta_primary, "Get In Touch");
        assert_eq!(config.hero.contact.location, "London");
        assert_eq!(config.hero.social.len(), 1);
        assert_eq!(config.projects[0].kind, "Open Source");
        let links = config.projects[0].links.as_ref().unwrap();
        assert!(links.npm.is_none());
        assert!(!links.is_empty());
        assert_eq!(config.education.degrees[0].kind, "Bachelor");
        assert_eq!(config.footer.built_with, "Rust & Dioxus");
        assert_eq!(config.seo.twitter_handle.as_deref(), Some("@ada"));
        assert!(!config.seasonal_effects.enabled);
        assert_eq!(config.seasonal_effects.effects[0].kind, EffectKind::Fall);
    }
}
