//! Seasonal effect definitions
//!
//! A definition describes one decorative overlay (snow, crackers, confetti),
//! the calendar window in which it is active and its tuning knobs. The
//! knobs are deliberately loose: a typo in the document must never break the
//! rest of the site, so unusable values deserialize to "absent".

use serde::{Deserialize, Deserializer, Serialize};

/// Which particle simulator renders an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Falling, drifting particles (snow)
    #[serde(rename = "snow", alias = "fall")]
    Fall,
    /// Radial bursts under gravity (firecrackers)
    #[serde(rename = "crackers", alias = "burst")]
    Burst,
    /// Finite shower of spinning squares
    #[serde(rename = "confetti")]
    Confetti,
}

impl EffectKind {
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::Fall => "Snow",
            EffectKind::Burst => "Crackers",
            EffectKind::Confetti => "Confetti",
        }
    }
}

/// Inclusive month/day window, may wrap across the new year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveWindow {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl ActiveWindow {
    pub fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    /// True when the window runs past December into the next year
    pub fn wraps_year(&self) -> bool {
        self.start_month > self.end_month
    }
}

/// Definition of a seasonal effect (loaded from config)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDefinition {
    /// Unique key, also used to reset the simulator when the effect changes
    pub name: String,

    #[serde(rename = "type")]
    pub kind: EffectKind,

    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Flattened on the wire: `startMonth`, `startDay`, `endMonth`, `endDay`
    #[serde(flatten)]
    pub active_window: ActiveWindow,

    #[serde(default)]
    pub settings: EffectSettings,
}

/// A tuning value as written in the document
///
/// Ranges are strings like `"2s-8s"`, counts are usually numbers but some
/// documents quote them. Interpretation happens in `folio-core`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            SettingValue::Number(_) => None,
        }
    }
}

/// Variant-specific tuning. Each simulator reads the fields it knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSettings {
    // ─── Snow / confetti ────────────────────────────────────────────────────
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub particle_count: Option<SettingValue>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub particle_size: Option<SettingValue>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub particle_opacity: Option<SettingValue>,
    /// Seconds to cross the viewport, e.g. `"2s-8s"`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub fall_speed: Option<SettingValue>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub blur: Option<SettingValue>,

    // ─── Crackers ───────────────────────────────────────────────────────────
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cracker_count: Option<SettingValue>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cracker_size: Option<SettingValue>,
    /// Particle lifetime range, e.g. `"1s-3s"`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub duration: Option<SettingValue>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub particles_per_cracker: Option<SettingValue>,

    // ─── Colors ─────────────────────────────────────────────────────────────
    /// Single color, or a comma separated list
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub color: Option<SettingValue>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn lenient<'de, D>(deserializer: D) -> Result<Option<SettingValue>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) => Some(SettingValue::Number(n)),
        Loose::Text(s) => Some(SettingValue::Text(s)),
        Loose::Other(_) => None,
    })
}

/// Effect catalog where each entry parses on its own. An entry with an
/// unknown `type`, a quoted month or any other shape error is skipped with a
/// warning; a non-list value yields an empty catalog.
pub(crate) fn lenient_effects<'de, D>(deserializer: D) -> Result<Vec<EffectDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Valid(EffectDefinition),
        Invalid(serde::de::IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        List(Vec<Entry>),
        Other(serde::de::IgnoredAny),
    }

    let entries = match Loose::deserialize(deserializer)? {
        Loose::List(entries) => entries,
        Loose::Other(_) => {
            tracing::warn!("Seasonal effects is not a list, no effects loaded");
            return Ok(Vec::new());
        }
    };

    let mut effects = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match entry {
            Entry::Valid(effect) => effects.push(effect),
            Entry::Invalid(_) => {
                tracing::warn!(index, "Skipping malformed seasonal effect definition");
            }
        }
    }
    Ok(effects)
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        List(Vec<String>),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::List(colors) => colors,
        Loose::Text(s) => s.split(',').map(|c| c.trim().to_string()).collect(),
        Loose::Other(_) => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Catalog {
        #[serde(deserialize_with = "lenient_effects")]
        effects: Vec<EffectDefinition>,
    }

    #[test]
    fn test_malformed_effects_are_skipped() {
        let json = r##"{
            "effects": [
                { "name": "fireworks", "type": "fireworks",
                  "startMonth": 7, "startDay": 4, "endMonth": 7, "endDay": 4 },
                { "name": "quoted", "type": "snow",
                  "startMonth": "12", "startDay": 1, "endMonth": 12, "endDay": 31 },
                { "name": "party", "type": "confetti",
                  "startMonth": 6, "startDay": 1, "endMonth": 6, "endDay": 1 }
            ]
        }"##;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.effects.len(), 1);
        assert_eq!(catalog.effects[0].name, "party");
        assert_eq!(catalog.effects[0].kind, EffectKind::Confetti);
    }

    #[test]
    fn test_non_list_effects_is_empty() {
        let catalog: Catalog = serde_json::from_str(r#"{ "effects": "snow" }"#).unwrap();
        assert!(catalog.effects.is_empty());
    }

    #[test]
    fn test_parse_snow_definition() {
        let json = r##"{
            "name": "winter",
            "type": "snow",
            "enabled": true,
            "startMonth": 12,
            "startDay": 1,
            "endMonth": 12,
            "endDay": 31,
            "settings": {
                "particleCount": 120,
                "particleSize": "2px-6px",
                "fallSpeed": "3s-9s",
                "color": "#ffffff"
            }
        }"##;

        let def: EffectDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "winter");
        assert_eq!(def.kind, EffectKind::Fall);
        assert_eq!(def.active_window, ActiveWindow::new(12, 1, 12, 31));
        assert_eq!(def.settings.particle_count, Some(SettingValue::Number(120.0)));
        assert_eq!(
            def.settings.particle_size,
            Some(SettingValue::Text("2px-6px".to_string()))
        );
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let json = r#"{"name":"ny","type":"crackers","startMonth":12,"startDay":31,"endMonth":1,"endDay":1}"#;
        let def: EffectDefinition = serde_json::from_str(json).unwrap();
        assert!(def.enabled);
        assert_eq!(def.kind, EffectKind::Burst);
        assert!(def.active_window.wraps_year());
        assert_eq!(def.settings, EffectSettings::default());
    }

    #[test]
    fn test_kind_aliases() {
        let kind: EffectKind = serde_json::from_str("\"fall\"").unwrap();
        assert_eq!(kind, EffectKind::Fall);
        let kind: EffectKind = serde_json::from_str("\"burst\"").unwrap();
        assert_eq!(kind, EffectKind::Burst);
        assert_eq!(serde_json::to_string(&EffectKind::Burst).unwrap(), "\"crackers\"");
    }

    #[test]
    fn test_garbage_settings_become_absent() {
        let json = r#"{
            "particleCount": {"nested": true},
            "particleOpacity": null,
            "duration": [1, 2],
            "colors": 42
        }"#;
        let settings: EffectSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.particle_count, None);
        assert_eq!(settings.particle_opacity, None);
        assert_eq!(settings.duration, None);
        assert!(settings.colors.is_empty());
    }

    #[test]
    fn test_colors_accepts_comma_string() {
        let json = r##"{"colors": "#FFD700, #FF6347"}"##;
        let settings: EffectSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.colors, vec!["#FFD700", "#FF6347"]);
    }
}
