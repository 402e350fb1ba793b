//! Sunday-indexed weekday lookup.
//!
//! Weekday names use the Sunday=0 … Saturday=6 convention throughout.
//! This is distinct from the Monday-start convention used for weekly
//! grouping in [`crate::week`]; callers must not conflate the two.

use chrono::{Datelike, NaiveDate};

/// Canonical weekday names, Sunday-indexed.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Sunday-indexed weekday of `date` (Sunday=0 … Saturday=6).
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// English weekday name of `date`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[weekday_index(date) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_weekday_name_known_dates() {
        assert_eq!(weekday_name(d(2024, 6, 16)), "Sunday");
        assert_eq!(weekday_name(d(2024, 6, 10)), "Monday");
        assert_eq!(weekday_name(d(2024, 6, 15)), "Saturday");
    }

    #[test]
    fn test_weekday_name_leap_day() {
        assert_eq!(weekday_name(d(2024, 2, 29)), "Thursday");
        assert_eq!(weekday_index(d(2024, 2, 29)), 4);
    }

    #[test]
    fn test_weekday_name_year_boundary() {
        assert_eq!(weekday_name(d(2023, 12, 31)), "Sunday");
        assert_eq!(weekday_name(d(2024, 1, 1)), "Monday");
    }

    #[test]
    fn test_weekday_name_is_pure() {
        let date = d(2024, 3, 10);
        assert_eq!(weekday_name(date), weekday_name(date));
    }

    #[test]
    fn test_index_matches_name_table() {
        // Walk a full week and check the two lookups agree
        for offset in 0..7 {
            let date = d(2024, 6, 9) + chrono::Duration::days(offset);
            let idx = weekday_index(date) as usize;
            assert_eq!(weekday_name(date), WEEKDAY_NAMES[idx]);
        }
    }
}
