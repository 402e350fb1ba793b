//! Monday-start week computation.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::weekday::{weekday_index, weekday_name};

/// One day of a Monday-start week: weekday name plus calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSlot {
    pub day: &'static str,
    pub date: NaiveDate,
}

impl WeekSlot {
    /// The date as zero-padded `YYYY-MM-DD` text, the wire format.
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Monday of the week containing `today`.
///
/// Sunday belongs to the *preceding* Monday's week: its Sunday-index is 0,
/// so it sits 6 days past the Monday that started its week.
pub fn monday_of(today: NaiveDate) -> NaiveDate {
    let idx = weekday_index(today);
    let back = if idx == 0 { 6 } else { idx - 1 };
    today - Duration::days(i64::from(back))
}

/// The seven days Monday…Sunday starting at `monday`.
pub fn week_sequence(monday: NaiveDate) -> [WeekSlot; 7] {
    std::array::from_fn(|i| {
        let date = monday + Duration::days(i as i64);
        WeekSlot {
            day: weekday_name(date),
            date,
        }
    })
}
