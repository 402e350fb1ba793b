//! Event types shared across the weekplan ecosystem.
//!
//! Tasks and meetings share one record shape; the kind only changes the
//! semantic label and the default time of day. Dates and times cross the
//! store boundary as zero-padded text (`YYYY-MM-DD`, `HH:MM`), never as
//! structured date/time objects.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Meeting,
}

impl EventKind {
    /// Time of day assigned when a create request omits `time`.
    pub fn default_time(self) -> &'static str {
        match self {
            EventKind::Task => "09:00",
            EventKind::Meeting => "10:00",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Task => write!(f, "Task"),
            EventKind::Meeting => write!(f, "Meeting"),
        }
    }
}

/// A task or meeting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique id, assigned by the store on creation
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`, zero-padded
    pub date: String,
    /// Weekday name derived from `date`, never client-supplied
    pub day: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a client supplies to create an event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
}

/// Partial update: only supplied fields change. `day` is absent on
/// purpose; it is recomputed from `date` by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub completed: Option<bool>,
}
