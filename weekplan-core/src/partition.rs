//! Bucketing events into calendar cells.

use crate::event::Event;

/// Events whose `date` field exactly matches `date`, ordered ascending by
/// time of day.
///
/// Matching is string equality on the ISO date text: an unpadded
/// `"2024-03-1"` never matches `"2024-03-01"`. Ordering compares the
/// `HH:MM` strings lexicographically, which is correct because the
/// zero-padded 24-hour format sorts the same as the times it encodes.
pub fn events_on<'a>(events: &'a [Event], date: &str) -> Vec<&'a Event> {
    let mut matched: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();
    matched.sort_by(|a, b| a.time.cmp(&b.time));
    matched
}
