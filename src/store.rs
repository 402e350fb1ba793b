//! Document-backed event store.
//!
//! Records live in memory under a lock and are persisted as a single JSON
//! document file on every write (temp file, then rename, so a crash never
//! leaves a half-written document). The store owns all validation: both
//! create and update re-check date format and the past-date rule, and the
//! derived `day` field is recomputed whenever `date` is written.

use std::path::PathBuf;

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use weekplan_core::{Event, EventDraft, EventKind, EventPatch, ValidationError, validate, week, weekday};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(EventKind),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// On-disk shape of the document file: one collection per event kind.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    tasks: Vec<Event>,
    meetings: Vec<Event>,
}

impl StoreData {
    fn collection(&self, kind: EventKind) -> &Vec<Event> {
        match kind {
            EventKind::Task => &self.tasks,
            EventKind::Meeting => &self.meetings,
        }
    }

    fn collection_mut(&mut self, kind: EventKind) -> &mut Vec<Event> {
        match kind {
            EventKind::Task => &mut self.tasks,
            EventKind::Meeting => &mut self.meetings,
        }
    }
}

pub struct EventStore {
    path: PathBuf,
    data: RwLock<StoreData>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl EventStore {
    /// Open the store at `path`, loading the document file if it exists.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let data = if path.exists() {
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            StoreData::default()
        };
        Ok(EventStore {
            path,
            data: RwLock::new(data),
        })
    }

    /// All events of one kind, ordered by date ascending, then time
    /// ascending. Both fields are zero-padded text, so lexicographic
    /// order is chronological order.
    pub async fn list(&self, kind: EventKind) -> Vec<Event> {
        let data = self.data.read().await;
        let mut events = data.collection(kind).clone();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        events
    }

    /// Snapshot of both collections, for calendar views that bucket tasks
    /// and meetings independently.
    pub async fn snapshot(&self) -> (Vec<Event>, Vec<Event>) {
        let data = self.data.read().await;
        (data.tasks.clone(), data.meetings.clone())
    }

    pub async fn create(&self, kind: EventKind, draft: EventDraft) -> Result<Event, StoreError> {
        validate::validate_title(&draft.title)?;
        let date = validate::parse_date(&draft.date)?;
        validate::ensure_not_past(date, today())?;

        let time = draft
            .time
            .unwrap_or_else(|| kind.default_time().to_string());
        validate::validate_time(&time)?;

        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            date: draft.date,
            day: weekday::weekday_name(date).to_string(),
            time,
            completed: false,
            created_at: now,
            updated_at: now,
        };

        let mut data = self.data.write().await;
        data.collection_mut(kind).push(event.clone());
        self.persist(&data)?;
        Ok(event)
    }

    /// Partial update: only supplied fields change. A supplied `date` is
    /// re-validated against the past-date rule and `day` is rederived
    /// from it.
    pub async fn update(
        &self,
        kind: EventKind,
        id: &str,
        patch: EventPatch,
    ) -> Result<Event, StoreError> {
        // Validate everything before taking the write lock
        if let Some(title) = &patch.title {
            validate::validate_title(title)?;
        }
        let parsed_date = match &patch.date {
            Some(s) => {
                let date = validate::parse_date(s)?;
                validate::ensure_not_past(date, today())?;
                Some(date)
            }
            None => None,
        };
        if let Some(time) = &patch.time {
            validate::validate_time(time)?;
        }

        let mut data = self.data.write().await;
        let event = data
            .collection_mut(kind)
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(kind))?;

        if let Some(title) = patch.title {
            event.title = title.trim().to_string();
        }
        if let (Some(date_text), Some(date)) = (patch.date, parsed_date) {
            event.date = date_text;
            event.day = weekday::weekday_name(date).to_string();
        }
        if let Some(time) = patch.time {
            event.time = time;
        }
        if let Some(completed) = patch.completed {
            event.completed = completed;
        }
        event.updated_at = Utc::now();

        let event = event.clone();
        self.persist(&data)?;
        Ok(event)
    }

    /// Flip `completed`, leaving every other field untouched.
    pub async fn toggle_completed(&self, kind: EventKind, id: &str) -> Result<Event, StoreError> {
        let mut data = self.data.write().await;
        let event = data
            .collection_mut(kind)
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(kind))?;

        event.completed = !event.completed;
        event.updated_at = Utc::now();

        let event = event.clone();
        self.persist(&data)?;
        Ok(event)
    }

    /// Remove the record and return it.
    pub async fn delete(&self, kind: EventKind, id: &str) -> Result<Event, StoreError> {
        let mut data = self.data.write().await;
        let collection = data.collection_mut(kind);
        let index = collection
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(kind))?;

        let event = collection.remove(index);
        self.persist(&data)?;
        Ok(event)
    }

    /// Replace the store contents with demo data spread over the week
    /// containing `today`. Writes directly into the collections; the
    /// Monday of the current week may already be in the past.
    pub async fn seed(&self, today: NaiveDate) -> Result<(), StoreError> {
        let slots = week::week_sequence(week::monday_of(today));

        let tasks = [
            (0, "Complete project proposal", "09:00", false),
            (0, "Review code changes", "14:00", true),
            (1, "Team standup preparation", "10:00", false),
            (2, "Update documentation", "11:00", false),
            (3, "Fix bug in login flow", "15:00", true),
            (4, "Deploy to staging", "16:00", false),
            (5, "Weekend reading", "10:00", false),
            (6, "Plan next week", "14:00", false),
        ];
        let meetings = [
            (0, "Team meeting", "10:00", true),
            (0, "Client call", "14:00", false),
            (1, "Sprint planning", "11:00", false),
            (2, "Design review", "15:00", true),
            (3, "One-on-one", "13:00", false),
            (4, "Retrospective", "16:00", false),
            (5, "Personal catch-up", "10:00", false),
            (6, "Family meeting", "14:00", false),
        ];

        let build = |rows: &[(usize, &str, &str, bool)]| -> Vec<Event> {
            let now = Utc::now();
            rows.iter()
                .map(|&(slot, title, time, completed)| Event {
                    id: Uuid::new_v4().to_string(),
                    title: title.to_string(),
                    date: slots[slot].iso(),
                    day: slots[slot].day.to_string(),
                    time: time.to_string(),
                    completed,
                    created_at: now,
                    updated_at: now,
                })
                .collect()
        };

        let mut data = self.data.write().await;
        data.tasks = build(&tasks);
        data.meetings = build(&meetings);
        self.persist(&data)?;
        Ok(())
    }

    fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, json)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> EventStore {
        let path = std::env::temp_dir().join(format!("weekplan-test-{}.json", Uuid::new_v4()));
        EventStore::open(path).unwrap()
    }

    fn draft(title: &str, date: &str, time: Option<&str>) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: date.to_string(),
            time: time.map(String::from),
        }
    }

    // Far-future dates keep the past-date rule out of the way
    const FUTURE_MON: &str = "2099-03-02";
    const FUTURE_TUE: &str = "2099-03-03";

    #[tokio::test]
    async fn test_create_assigns_id_and_derives_day() {
        let store = temp_store();
        let event = store
            .create(EventKind::Task, draft("Write report", FUTURE_MON, None))
            .await
            .unwrap();

        assert!(!event.id.is_empty());
        assert_eq!(event.day, "Monday");
        assert_eq!(event.time, "09:00");
        assert!(!event.completed);
    }

    #[tokio::test]
    async fn test_create_meeting_defaults_to_ten() {
        let store = temp_store();
        let event = store
            .create(EventKind::Meeting, draft("Kickoff", FUTURE_MON, None))
            .await
            .unwrap();
        assert_eq!(event.time, "10:00");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let store = temp_store();

        let err = store
            .create(EventKind::Task, draft("", FUTURE_MON, None))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MissingTitle)
        ));

        let err = store
            .create(EventKind::Task, draft("ok", "2099-3-2", None))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidDate(_))
        ));

        let err = store
            .create(EventKind::Task, draft("ok", "2000-01-01", None))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::DateInPast(_))
        ));

        let err = store
            .create(EventKind::Task, draft("ok", FUTURE_MON, Some("25:00")))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidTime(_))
        ));
    }

    #[tokio::test]
    async fn test_update_is_partial_and_rederives_day() {
        let store = temp_store();
        let created = store
            .create(EventKind::Task, draft("Write report", FUTURE_MON, Some("08:00")))
            .await
            .unwrap();

        let patch = EventPatch {
            date: Some(FUTURE_TUE.to_string()),
            ..Default::default()
        };
        let updated = store
            .update(EventKind::Task, &created.id, patch)
            .await
            .unwrap();

        assert_eq!(updated.date, FUTURE_TUE);
        assert_eq!(updated.day, "Tuesday");
        // Untouched fields survive
        assert_eq!(updated.title, "Write report");
        assert_eq!(updated.time, "08:00");
    }

    #[tokio::test]
    async fn test_update_revalidates_past_date() {
        let store = temp_store();
        let created = store
            .create(EventKind::Meeting, draft("Kickoff", FUTURE_MON, None))
            .await
            .unwrap();

        let patch = EventPatch {
            date: Some("2000-01-01".to_string()),
            ..Default::default()
        };
        let err = store
            .update(EventKind::Meeting, &created.id, patch)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::DateInPast(_))
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = temp_store();
        let err = store
            .update(EventKind::Task, "nope", EventPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(EventKind::Task)));
    }

    #[tokio::test]
    async fn test_toggle_flips_completed_only() {
        let store = temp_store();
        let created = store
            .create(EventKind::Task, draft("Write report", FUTURE_MON, None))
            .await
            .unwrap();

        let toggled = store
            .toggle_completed(EventKind::Task, &created.id)
            .await
            .unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.title, created.title);
        assert_eq!(toggled.date, created.date);
        assert_eq!(toggled.day, created.day);
        assert_eq!(toggled.time, created.time);

        let toggled_back = store
            .toggle_completed(EventKind::Task, &created.id)
            .await
            .unwrap();
        assert!(!toggled_back.completed);
    }

    #[tokio::test]
    async fn test_delete_removes_and_returns() {
        let store = temp_store();
        let created = store
            .create(EventKind::Meeting, draft("Kickoff", FUTURE_MON, None))
            .await
            .unwrap();

        let deleted = store
            .delete(EventKind::Meeting, &created.id)
            .await
            .unwrap();
        assert_eq!(deleted.id, created.id);

        let err = store
            .delete(EventKind::Meeting, &created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(EventKind::Meeting)));
    }

    #[tokio::test]
    async fn test_list_orders_by_date_then_time() {
        let store = temp_store();
        store
            .create(EventKind::Task, draft("b", FUTURE_TUE, Some("09:00")))
            .await
            .unwrap();
        store
            .create(EventKind::Task, draft("c", FUTURE_MON, Some("15:00")))
            .await
            .unwrap();
        store
            .create(EventKind::Task, draft("a", FUTURE_MON, Some("08:00")))
            .await
            .unwrap();

        let titles: Vec<_> = store
            .list(EventKind::Task)
            .await
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["a", "c", "b"]);
    }

    #[tokio::test]
    async fn test_kinds_are_independent_collections() {
        let store = temp_store();
        let task = store
            .create(EventKind::Task, draft("t", FUTURE_MON, None))
            .await
            .unwrap();

        // A task id is invisible to the meeting collection
        let err = store
            .toggle_completed(EventKind::Meeting, &task.id)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(EventKind::Meeting)));
    }

    #[tokio::test]
    async fn test_persistence_round_trip() {
        let path = std::env::temp_dir().join(format!("weekplan-test-{}.json", Uuid::new_v4()));

        let store = EventStore::open(path.clone()).unwrap();
        let created = store
            .create(EventKind::Task, draft("Durable", FUTURE_MON, None))
            .await
            .unwrap();
        drop(store);

        let reopened = EventStore::open(path).unwrap();
        let events = reopened.list(EventKind::Task).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, created.id);
        assert_eq!(events[0].day, "Monday");
    }

    #[tokio::test]
    async fn test_seed_fills_the_current_week() {
        let store = temp_store();
        let today = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        store.seed(today).await.unwrap();

        let (tasks, meetings) = store.snapshot().await;
        assert_eq!(tasks.len(), 8);
        assert_eq!(meetings.len(), 8);
        // Week of Sunday 2024-06-16 starts on Monday 2024-06-10
        assert_eq!(tasks[0].date, "2024-06-10");
        assert_eq!(tasks[0].day, "Monday");
        assert_eq!(meetings[7].date, "2024-06-16");
        assert_eq!(meetings[7].day, "Sunday");
    }
}
