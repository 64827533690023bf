//! Visibility state machine for the floating seasonal-effect toggle.
//!
//! ```text
//!            effect active & enabled            scroll (effect selected)
//!  Hidden ─────────────────────────────► Visible ◄──────────────┐
//!    ▲                                      │  └─────────────────┘
//!    └──────── deadline expired ────────────┘   (re-arms deadline)
//! ```
//!
//! Time is passed in by the caller as milliseconds, which keeps this module
//! free of any timer or browser dependency. Every transition to Visible
//! returns a fresh deadline; the caller schedules a timer and hands the
//! deadline back to [`ToggleButton::expire`]. Stale deadlines are ignored, so
//! a burst of scrolls leaves exactly one effective timer.

/// How long the button stays visible after the last scroll
pub const HIDE_DELAY_MS: f64 = 3000.0;

pub const DISABLE_TITLE: &str = "Disable seasonal effect";
pub const ENABLE_TITLE: &str = "Enable seasonal effect";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToggleButton {
    has_effect: bool,
    enabled: bool,
    visible: bool,
    /// Deadline of the most recent show; older deadlines are stale
    hide_at: Option<f64>,
}

impl ToggleButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Track whether an effect is selected and whether it is enabled.
    ///
    /// Becoming active while enabled shows the button and returns the
    /// deadline to schedule. Losing the effect or disabling it hides the
    /// button at once.
    pub fn sync(&mut self, has_effect: bool, enabled: bool, now_ms: f64) -> Option<f64> {
        let was_running = self.has_effect && self.enabled;
        self.has_effect = has_effect;
        self.enabled = enabled;

        if !has_effect || !enabled {
            self.visible = false;
            self.hide_at = None;
            return None;
        }
        if was_running {
            return None;
        }
        Some(self.show(now_ms))
    }

    /// A scroll happened. Shows the button and re-arms the deadline when an
    /// effect is selected; returns the deadline to schedule.
    pub fn on_scroll(&mut self, now_ms: f64) -> Option<f64> {
        if !self.has_effect {
            return None;
        }
        Some(self.show(now_ms))
    }

    /// A scheduled timer fired. Hides the button only if `deadline` is still
    /// the current one.
    pub fn expire(&mut self, deadline: f64) {
        if self.hide_at == Some(deadline) {
            self.visible = false;
            self.hide_at = None;
        }
    }

    /// Title and aria-label for the current enabled state
    pub fn title(enabled: bool) -> &'static str {
        if enabled { DISABLE_TITLE } else { ENABLE_TITLE }
    }

    fn show(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + HIDE_DELAY_MS;
        self.visible = true;
        self.hide_at = Some(deadline);
        deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_without_effect() {
        let mut button = ToggleButton::new();
        assert_eq!(button.sync(false, true, 0.0), None);
        assert_eq!(button.on_scroll(10.0), None);
        assert!(!button.is_visible());
    }

    #[test]
    fn test_shown_when_effect_becomes_active() {
        let mut button = ToggleButton::new();
        let deadline = button.sync(true, true, 100.0);
        assert_eq!(deadline, Some(3100.0));
        assert!(button.is_visible());

        // Re-syncing the same state does not re-arm
        assert_eq!(button.sync(true, true, 500.0), None);

        button.expire(3100.0);
        assert!(!button.is_visible());
        assert_eq!(button.sync(true, true, 4000.0), None);
        assert!(!button.is_visible());
    }

    #[test]
    fn test_scroll_rearms_deadline() {
        let mut button = ToggleButton::new();
        let first = button.sync(true, true, 0.0).unwrap();
        let second = button.on_scroll(2000.0).unwrap();
        assert_eq!(second, 5000.0);

        // The first timer fires but is stale
        button.expire(first);
        assert!(button.is_visible());

        button.expire(second);
        assert!(!button.is_visible());
    }

    #[test]
    fn test_disable_hides_until_next_scroll() {
        let mut button = ToggleButton::new();
        button.sync(true, true, 0.0);
        assert_eq!(button.sync(true, false, 100.0), None);
        assert!(!button.is_visible());

        assert_eq!(button.on_scroll(200.0), Some(3200.0));
        assert!(button.is_visible());

        // Re-enabling shows it with a fresh deadline
        button.sync(true, false, 300.0);
        assert_eq!(button.sync(true, true, 400.0), Some(3400.0));
    }

    #[test]
    fn test_titles() {
        assert_eq!(ToggleButton::title(true), "Disable seasonal effect");
        assert_eq!(ToggleButton::title(false), "Enable seasonal effect");
    }
}
