//! 42-cell month grid generation.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::weekday::weekday_index;

/// Number of cells in a month grid: six full Sunday-start weeks.
pub const GRID_CELLS: usize = 42;

/// One cell of a month grid. Leading/trailing cells carry real calendar
/// dates from the neighboring months, not placeholders, so they support
/// the same event lookups as in-month cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
}

impl MonthCell {
    /// The date as zero-padded `YYYY-MM-DD` text, the wire format.
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// The 42-cell grid for `year`/`month`, starting from the Sunday on or
/// before the 1st. Returns `None` when the year/month pair does not name
/// a real calendar month, or when the grid would run past the supported
/// date range (the leading/trailing cells reach into neighboring months).
pub fn month_grid(year: i32, month: u32, today: NaiveDate) -> Option<Vec<MonthCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let start = first.checked_sub_signed(Duration::days(i64::from(weekday_index(first))))?;

    (0..GRID_CELLS as i64)
        .map(|i| {
            let date = start.checked_add_signed(Duration::days(i))?;
            Some(MonthCell {
                date,
                in_month: date.year() == year && date.month() == month,
                is_today: date == today,
            })
        })
        .collect()
}
