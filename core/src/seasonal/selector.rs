use chrono::Datelike;
use folio_types::EffectDefinition;

use super::window::window_contains;

/// Pick the effect to show on `date`.
///
/// Walks the catalog in order and returns the first enabled definition whose
/// window contains the date. Overlapping windows are resolved by catalog
/// order alone; later matches are never rendered.
pub fn select_active<'a>(
    catalog: &'a [EffectDefinition],
    date: &impl Datelike,
) -> Option<&'a EffectDefinition> {
    let active = catalog
        .iter()
        .find(|effect| effect.enabled && window_contains(&effect.active_window, date));

    match active {
        Some(effect) => tracing::debug!(
            name = %effect.name,
            kind = effect.kind.label(),
            month = date.month(),
            day = date.day(),
            "Seasonal effect active"
        ),
        None => tracing::debug!(
            candidates = catalog.len(),
            month = date.month(),
            day = date.day(),
            "No seasonal effect active"
        ),
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_types::{ActiveWindow, EffectKind, EffectSettings};

    fn make_effect(name: &str, kind: EffectKind, enabled: bool, window: ActiveWindow) -> EffectDefinition {
        EffectDefinition {
            name: name.to_string(),
            kind,
            enabled,
            active_window: window,
            settings: EffectSettings::default(),
        }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    #[test]
    fn test_winter_and_new_year() {
        let catalog = vec![
            make_effect("winter", EffectKind::Fall, true, ActiveWindow::new(12, 1, 12, 31)),
            make_effect("newyear", EffectKind::Burst, true, ActiveWindow::new(1, 1, 1, 5)),
        ];

        assert_eq!(select_active(&catalog, &date(12, 25)).unwrap().name, "winter");
        assert_eq!(select_active(&catalog, &date(1, 3)).unwrap().name, "newyear");
        assert!(select_active(&catalog, &date(7, 4)).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let catalog = vec![
            make_effect("holidays", EffectKind::Fall, true, ActiveWindow::new(12, 20, 1, 5)),
            make_effect("newyear", EffectKind::Confetti, true, ActiveWindow::new(12, 31, 1, 1)),
        ];

        // Both windows contain Dec 31; catalog order decides
        assert_eq!(select_active(&catalog, &date(12, 31)).unwrap().name, "holidays");
    }

    #[test]
    fn test_disabled_effect_is_never_selected() {
        let catalog = vec![make_effect(
            "winter",
            EffectKind::Fall,
            false,
            ActiveWindow::new(12, 1, 12, 31),
        )];
        assert!(select_active(&catalog, &date(12, 25)).is_none());
    }

    #[test]
    fn test_disabled_entry_falls_through_to_next_match() {
        let catalog = vec![
            make_effect("snow", EffectKind::Fall, false, ActiveWindow::new(12, 1, 12, 31)),
            make_effect("confetti", EffectKind::Confetti, true, ActiveWindow::new(12, 24, 12, 26)),
        ];
        assert_eq!(select_active(&catalog, &date(12, 25)).unwrap().name, "confetti");
        assert!(select_active(&catalog, &date(12, 2)).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(select_active(&[], &date(1, 1)).is_none());
    }
}
