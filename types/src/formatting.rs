//! Centralized display formatting utilities.
//!
//! All user-visible dates, counts and labels go through this module so the
//! home page and the blog pages agree on wording.

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for a 1-based month number.
///
/// Returns an empty string for out-of-range months.
///
/// # Examples
/// ```
/// use folio_types::formatting::month_name;
/// assert_eq!(month_name(1), "January");
/// assert_eq!(month_name(12), "December");
/// assert_eq!(month_name(13), "");
/// ```
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Format a date the long way, as shown on a blog post header.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_long_date;
/// assert_eq!(format_long_date(2025, 11, 23), "November 23, 2025");
/// assert_eq!(format_long_date(2024, 2, 1), "February 1, 2024");
/// ```
pub fn format_long_date(year: i32, month: u32, day: u32) -> String {
    format!("{} {}, {}", month_name(month), day, year)
}

/// Format a date in compact numeric form, as shown on blog cards.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_short_date;
/// assert_eq!(format_short_date(2025, 11, 23), "11/23/2025");
/// assert_eq!(format_short_date(2024, 2, 1), "2/1/2024");
/// ```
pub fn format_short_date(year: i32, month: u32, day: u32) -> String {
    format!("{}/{}/{}", month, day, year)
}

/// Pick the singular or plural form of a noun for a count.
///
/// # Examples
/// ```
/// use folio_types::formatting::pluralize;
/// assert_eq!(pluralize(1, "blog", "blogs"), "blog");
/// assert_eq!(pluralize(0, "blog", "blogs"), "blogs");
/// assert_eq!(pluralize(7, "blog", "blogs"), "blogs");
/// ```
#[inline]
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Format the reading time label.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_reading_time;
/// assert_eq!(format_reading_time(4), "4 min read");
/// ```
pub fn format_reading_time(minutes: usize) -> String {
    format!("{} min read", minutes)
}

/// Format the result counter under the blog grid.
///
/// The noun agrees with the total, not with the number shown.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_results_count;
/// assert_eq!(format_results_count(2, 5), "Showing 2 of 5 blogs");
/// assert_eq!(format_results_count(1, 1), "Showing 1 of 1 blog");
/// assert_eq!(format_results_count(0, 0), "Showing 0 of 0 blogs");
/// ```
pub fn format_results_count(shown: usize, total: usize) -> String {
    format!(
        "Showing {} of {} {}",
        shown,
        total,
        pluralize(total, "blog", "blogs")
    )
}

/// Format the footer copyright line.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_copyright;
/// assert_eq!(
///     format_copyright(2026, "Ada Lovelace"),
///     "© 2026 Ada Lovelace. All rights reserved."
/// );
/// ```
pub fn format_copyright(year: i32, name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, name)
}

/// Truncate a string to `max_chars`, adding "..." if truncated.
///
/// # Examples
/// ```
/// use folio_types::formatting::truncate_text;
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("this is a very long name", 10), "this is...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(6), "June");
    }

    #[test]
    fn test_truncate_text_exact_length() {
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("ünïcödé text", 6), "ünï...");
    }
}
