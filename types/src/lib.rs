//! Shared configuration types for the folio portfolio site.
//!
//! Everything here mirrors the JSON document served at
//! `/config/portfolio.json`. Field names are camelCase on the wire and every
//! section defaults when absent, so a partially filled document still renders.

pub mod formatting;
mod portfolio;
mod seasonal;

pub use portfolio::{
    Certification, ContactInfo, ContactSection, ContactSocial, Degree, Education,
    ExperienceEntry, Footer, Hero, HeroContact, NavItem, PortfolioConfig, Project, ProjectLinks,
    SeasonalEffectsConfig, SeoConfig, SkillCategory, SocialLink,
};
pub use seasonal::{ActiveWindow, EffectDefinition, EffectKind, EffectSettings, SettingValue};
