//! Settings resolution for the particle simulators
//!
//! Document values are parsed best-effort: `"2s-8s"`, `"3px-10px"` and bare
//! numbers all work, anything unusable falls back to the simulator default
//! for that bound. Nothing here ever fails.

use folio_types::{EffectSettings, SettingValue};

/// Parse the leading integer of a string, ignoring any unit suffix.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when no digit is found.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Parse a `"<min><unit>-<max><unit>"` range into its two bounds
pub fn parse_range(raw: &str) -> (Option<f64>, Option<f64>) {
    let mut parts = raw.split('-');
    let min = parts.next().and_then(parse_leading_int).map(|n| n as f64);
    let max = parts.next().and_then(parse_leading_int).map(|n| n as f64);
    (min, max)
}

/// Resolve a range setting, falling back per bound
pub fn resolve_range(value: Option<&SettingValue>, default: (f64, f64)) -> (f64, f64) {
    let (min, max) = match value {
        Some(SettingValue::Text(raw)) => parse_range(raw),
        Some(SettingValue::Number(n)) if n.is_finite() => (Some(*n), Some(*n)),
        _ => (None, None),
    };
    (min.unwrap_or(default.0), max.unwrap_or(default.1))
}

/// Like [`resolve_range`], but bounds that are zero or negative are replaced
/// by the default. Used for durations that end up as divisors.
pub fn resolve_positive_range(value: Option<&SettingValue>, default: (f64, f64)) -> (f64, f64) {
    let (min, max) = resolve_range(value, default);
    (
        if min > 0.0 { min } else { default.0 },
        if max > 0.0 { max } else { default.1 },
    )
}

/// Resolve a count. Missing, zero, negative or unparsable → default.
pub fn resolve_count(value: Option<&SettingValue>, default: usize) -> usize {
    let parsed = match value {
        Some(SettingValue::Number(n)) if n.is_finite() => Some(n.trunc() as i64),
        Some(SettingValue::Text(raw)) => parse_leading_int(raw),
        _ => None,
    };
    match parsed {
        Some(n) if n > 0 => n as usize,
        _ => default,
    }
}

/// Resolve an opacity in `(0, 1]`. Zero or unusable values → default.
pub fn resolve_fraction(value: Option<&SettingValue>, default: f64) -> f64 {
    let parsed = match value {
        Some(SettingValue::Number(n)) => Some(*n),
        Some(SettingValue::Text(raw)) => raw.trim().parse::<f64>().ok(),
        None => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => n.min(1.0),
        _ => default,
    }
}

/// Resolve a pixel length such as `"2px"`; negative or unusable → default
pub fn resolve_pixels(value: Option<&SettingValue>, default: f64) -> f64 {
    let parsed = match value {
        Some(SettingValue::Number(n)) if n.is_finite() => Some(*n),
        Some(SettingValue::Text(raw)) => parse_leading_int(raw).map(|n| n as f64),
        _ => None,
    };
    match parsed {
        Some(px) if px >= 0.0 => px,
        _ => default,
    }
}

/// Resolve the color palette: `colors` list first, then a comma separated
/// `color`, then the defaults.
pub fn resolve_palette(settings: &EffectSettings, defaults: &[&str]) -> Vec<String> {
    let from_list: Vec<String> = settings
        .colors
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    if !from_list.is_empty() {
        return from_list;
    }

    let from_color: Vec<String> = settings
        .color
        .as_ref()
        .and_then(SettingValue::as_text)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if !from_color.is_empty() {
        return from_color;
    }

    defaults.iter().map(|c| c.to_string()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved per-variant settings
// ─────────────────────────────────────────────────────────────────────────────

/// Falling particles
#[derive(Debug, Clone, PartialEq)]
pub struct SnowSettings {
    pub particle_count: usize,
    /// Diameter range in px
    pub size: (f64, f64),
    pub opacity: f64,
    /// Seconds for a particle to cross the viewport height
    pub fall_seconds: (f64, f64),
    pub color: String,
    pub blur_px: f64,
}

impl SnowSettings {
    pub fn resolve(settings: &EffectSettings) -> Self {
        Self {
            particle_count: resolve_count(settings.particle_count.as_ref(), 100),
            size: resolve_range(settings.particle_size.as_ref(), (2.0, 8.0)),
            opacity: resolve_fraction(settings.particle_opacity.as_ref(), 0.8),
            fall_seconds: resolve_positive_range(settings.fall_speed.as_ref(), (2.0, 8.0)),
            color: resolve_palette(settings, &["#ffffff"]).swap_remove(0),
            blur_px: resolve_pixels(settings.blur.as_ref(), 0.0),
        }
    }
}

/// Firecracker bursts
#[derive(Debug, Clone, PartialEq)]
pub struct CrackerSettings {
    /// Upper bound on simultaneously live explosions
    pub max_explosions: usize,
    pub particles_per_cracker: usize,
    pub size: (f64, f64),
    /// Particle lifetime range in seconds
    pub duration_secs: (f64, f64),
    pub colors: Vec<String>,
}

impl CrackerSettings {
    pub fn resolve(settings: &EffectSettings) -> Self {
        Self {
            max_explosions: resolve_count(settings.cracker_count.as_ref(), 50),
            particles_per_cracker: resolve_count(settings.particles_per_cracker.as_ref(), 20),
            size: resolve_range(settings.cracker_size.as_ref(), (3.0, 10.0)),
            duration_secs: resolve_positive_range(settings.duration.as_ref(), (1.0, 3.0)),
            colors: resolve_palette(settings, &["#FFD700", "#FF6347", "#00CED1", "#FF1493"]),
        }
    }
}

/// Confetti shower
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiSettings {
    pub particle_count: usize,
    pub size: (f64, f64),
    pub fall_seconds: (f64, f64),
    pub colors: Vec<String>,
}

impl ConfettiSettings {
    pub fn resolve(settings: &EffectSettings) -> Self {
        Self {
            particle_count: resolve_count(settings.particle_count.as_ref(), 150),
            size: resolve_range(settings.particle_size.as_ref(), (3.0, 6.0)),
            fall_seconds: resolve_positive_range(settings.fall_speed.as_ref(), (3.0, 6.0)),
            colors: resolve_palette(
                settings,
                &["#FFD700", "#FF6347", "#00CED1", "#FF1493", "#32CD32"],
            ),
        }
    }
}
