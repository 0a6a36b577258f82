//! Calendar helpers for daily notes.
//!
//! Daily notes are keyed by local calendar date (`YYYY-MM-DD` on the wire)
//! and entries carry an `HH:mm` timestamp. Everything here is a pure
//! function over [`NaiveDate`] except the two "now" accessors.

use chrono::{Local, NaiveDate};

/// The current date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The current local time as an `HH:mm` string, the format entries carry
/// on the wire.
pub fn current_time() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Long form used for history rows, e.g. `"Monday, January 1, 2024"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short form used for history rows, e.g. `"Jan 1"`.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Whether `date` is the current local calendar date.
pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// A human relative label for `date`: `"Today"`, `"Yesterday"`,
/// `"N days ago"` and so on.
pub fn relative_date(date: NaiveDate) -> String {
    relative_label(date, today())
}

/// The relative label of `date` as seen from `today`.
///
/// Buckets: 0 days is `Today`, 1 is `Yesterday`, 2-6 are days, 7-29 are
/// weeks, 30-364 are months, and anything beyond is years. A date in the
/// future saturates to `Today` rather than producing a negative count.
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => {
            let weeks = days / 7;
            format!("{weeks} week{} ago", plural(weeks))
        }
        30..=364 => {
            let months = days / 30;
            format!("{months} month{} ago", plural(months))
        }
        _ => {
            let years = days / 365;
            format!("{years} year{} ago", plural(years))
        }
    }
}

/// Sorts dates so the most recent comes first.
pub fn sort_newest_first(dates: &mut [NaiveDate]) {
    dates.sort_unstable_by(|a, b| b.cmp(a));
}

fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    #[test]
    fn relative_label_buckets() {
        let today = date("2024-03-15");
        let cases = [
            ("2024-03-15", "Today"),
            ("2024-03-14", "Yesterday"),
            ("2024-03-13", "2 days ago"),
            ("2024-03-09", "6 days ago"),
            ("2024-03-08", "1 week ago"),
            ("2024-03-02", "1 week ago"),
            ("2024-03-01", "2 weeks ago"),
            ("2024-02-15", "4 weeks ago"),
            ("2024-02-14", "1 month ago"),
            ("2024-01-15", "2 months ago"),
            ("2023-03-17", "12 months ago"),
            ("2023-03-16", "1 year ago"),
            ("2022-03-17", "1 year ago"),
            ("2022-03-14", "2 years ago"),
            ("2021-03-15", "3 years ago"),
        ];
        for (input, expected) in cases {
            assert_eq!(relative_label(date(input), today), expected, "for {input}");
        }
    }

    #[test]
    fn relative_label_saturates_future_dates() {
        let today = date("2024-03-15");
        assert_eq!(relative_label(date("2024-03-16"), today), "Today");
        assert_eq!(relative_label(date("2025-01-01"), today), "Today");
    }

    #[test]
    fn long_and_short_formats() {
        let d = date("2024-01-01");
        assert_eq!(format_date(d), "Monday, January 1, 2024");
        assert_eq!(format_date_short(d), "Jan 1");

        let d = date("2024-11-09");
        assert_eq!(format_date(d), "Saturday, November 9, 2024");
        assert_eq!(format_date_short(d), "Nov 9");
    }

    #[test]
    fn sort_newest_first_orders_descending() {
        let mut dates = vec![date("2024-01-01"), date("2024-01-03"), date("2023-12-31")];
        sort_newest_first(&mut dates);
        assert_eq!(
            dates,
            vec![date("2024-01-03"), date("2024-01-01"), date("2023-12-31")]
        );
    }
}
