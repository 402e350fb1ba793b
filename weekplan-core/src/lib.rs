//! Shared calendar engine for the weekplan ecosystem.
//!
//! This crate owns the date/week math and the event data model used by the
//! weekplan backend and its clients:
//! - `week` / `month` for Monday-start week sequences and 42-cell month grids
//! - `weekday` for Sunday-indexed weekday-name lookup
//! - `partition` for bucketing events into calendar cells
//! - `validate` for the text date/time formats exchanged on the wire
//!
//! Everything here is pure computation over provided date values: no I/O,
//! nothing async, safe to call from any concurrency context. Both the server
//! and UI clients route their week math through this crate so the two can
//! never drift apart.

pub mod error;
pub mod event;
pub mod month;
pub mod partition;
pub mod validate;
pub mod week;
pub mod weekday;

pub use error::ValidationError;
pub use event::{Event, EventDraft, EventKind, EventPatch};
pub use month::{MonthCell, month_grid};
pub use partition::events_on;
pub use week::{WeekSlot, monday_of, week_sequence};
pub use weekday::{WEEKDAY_NAMES, weekday_index, weekday_name};
