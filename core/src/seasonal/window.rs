use chrono::Datelike;
use folio_types::ActiveWindow;

/// Test whether a calendar date falls inside an effect's active window
pub fn window_contains(window: &ActiveWindow, date: &impl Datelike) -> bool {
    contains_month_day(window, date.month(), date.day())
}

/// Inclusive month/day containment.
///
/// Three shapes of window:
/// - start and end in the same month: plain day range
/// - start month before end month: normal span within one year
/// - start month after end month: span that wraps past December
pub fn contains_month_day(window: &ActiveWindow, month: u32, day: u32) -> bool {
    let ActiveWindow {
        start_month,
        start_day,
        end_month,
        end_day,
    } = *window;

    if start_month == end_month {
        return month == start_month && day >= start_day && day <= end_day;
    }

    if month == start_month {
        return day >= start_day;
    }
    if month == end_month {
        return day <= end_day;
    }

    if start_month < end_month {
        month > start_month && month < end_month
    } else {
        month > start_month || month < end_month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test]
    fn test_same_month_window() {
        let window = ActiveWindow::new(12, 20, 12, 26);
        assert!(window_contains(&window, &date(12, 20)));
        assert!(window_contains(&window, &date(12, 26)));
        assert!(!window_contains(&window, &date(12, 19)));
        assert!(!window_contains(&window, &date(12, 27)));
        assert!(!window_contains(&window, &date(11, 22)));
    }

    #[test]
    fn test_normal_span() {
        let window = ActiveWindow::new(3, 15, 5, 10);
        assert!(!window_contains(&window, &date(3, 14)));
        assert!(window_contains(&window, &date(3, 15)));
        assert!(window_contains(&window, &date(4, 1)));
        assert!(window_contains(&window, &date(5, 10)));
        assert!(!window_contains(&window, &date(5, 11)));
        assert!(!window_contains(&window, &date(6, 1)));
    }

    #[test]
    fn test_year_wrapping_span() {
        let window = ActiveWindow::new(12, 20, 1, 5);
        assert!(window_contains(&window, &date(12, 25)));
        assert!(window_contains(&window, &date(1, 2)));
        assert!(window_contains(&window, &date(1, 5)));
        assert!(!window_contains(&window, &date(1, 6)));
        assert!(!window_contains(&window, &date(12, 19)));
        assert!(!window_contains(&window, &date(6, 1)));
    }

    #[test]
    fn test_wide_wrapping_span_covers_middle_months() {
        // Nov 1 → Feb 28 covers all of December and January
        let window = ActiveWindow::new(11, 1, 2, 28);
        assert!(contains_month_day(&window, 12, 1));
        assert!(contains_month_day(&window, 1, 31));
        assert!(!contains_month_day(&window, 3, 1));
        assert!(!contains_month_day(&window, 10, 31));
    }
}
