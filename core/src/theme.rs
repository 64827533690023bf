use serde::{Deserialize, Serialize};

/// Local storage key holding the chosen theme
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Site color theme, applied as a `theme-<name>` class on the root element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Github,
    Dark,
    Yellow,
    Green,
    White,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Github,
        Theme::Dark,
        Theme::Yellow,
        Theme::Green,
        Theme::White,
    ];

    /// Themes offered in the switcher menu; the default is not listed
    pub const PICKER: [Theme; 4] = [Theme::Dark, Theme::Yellow, Theme::Green, Theme::White];

    /// Stored / serialized name
    pub fn name(self) -> &'static str {
        match self {
            Theme::Github => "github",
            Theme::Dark => "dark",
            Theme::Yellow => "yellow",
            Theme::Green => "green",
            Theme::White => "white",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Github => "GitHub",
            Theme::Dark => "Dark Blue",
            Theme::Yellow => "Sunny Yellow",
            Theme::Green => "Nature Green",
            Theme::White => "Clean White",
        }
    }

    /// Class on the color dot in the switcher menu
    pub fn swatch_class(self) -> &'static str {
        match self {
            Theme::Github => "swatch-github",
            Theme::Dark => "swatch-blue",
            Theme::Yellow => "swatch-yellow",
            Theme::Green => "swatch-green",
            Theme::White => "swatch-white",
        }
    }

    /// Class applied to `<html>`
    pub fn root_class(self) -> String {
        format!("theme-{}", self.name())
    }

    pub fn parse(name: &str) -> Option<Theme> {
        Self::ALL.into_iter().find(|t| t.name() == name.trim())
    }

    /// Resolve a value read from storage. Absent or unknown → default.
    pub fn from_stored(stored: Option<&str>) -> Theme {
        match stored {
            None => Theme::default(),
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                tracing::warn!(stored = raw, "Unknown theme in storage, using default");
                Theme::default()
            }),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_github() {
        assert_eq!(Theme::default(), Theme::Github);
        assert_eq!(Theme::default().root_class(), "theme-github");
    }

    #[test]
    fn test_parse_round_trips_names() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.name()), Some(theme));
        }
        assert_eq!(Theme::parse("purple"), None);
    }

    #[test]
    fn test_from_stored_falls_back() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("neon")), Theme::Github);
        assert_eq!(Theme::from_stored(None), Theme::Github);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Theme::Dark.display_name(), "Dark Blue");
        assert_eq!(Theme::Yellow.display_name(), "Sunny Yellow");
        assert_eq!(Theme::Green.display_name(), "Nature Green");
        assert_eq!(Theme::White.display_name(), "Clean White");
        assert!(!Theme::PICKER.contains(&Theme::Github));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::White).unwrap(), "\"white\"");
        let parsed: Theme = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(parsed, Theme::Green);
    }
}
