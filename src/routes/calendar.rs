//! Engine-backed calendar views.
//!
//! These endpoints do the week/month partitioning server-side so clients
//! render straight from the response instead of re-deriving the date math
//! themselves.

use axum::routing::get;
use axum::{Json, Router, extract::Path, extract::State};
use chrono::Local;
use serde::Serialize;

use weekplan_core::{Event, ValidationError, events_on, month_grid, monday_of, week_sequence};

use crate::auth::AuthUser;
use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/week", get(week))
        .route("/api/month/{year}/{month}", get(month))
}

/// One day of the current week with its event buckets.
#[derive(Serialize)]
pub struct DaySchedule {
    pub day: &'static str,
    pub date: String,
    pub tasks: Vec<Event>,
    pub meetings: Vec<Event>,
}

/// GET /api/week - Monday..Sunday of the current week, events bucketed
/// per day
async fn week(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<DaySchedule>>, ApiError> {
    let (tasks, meetings) = state.store.snapshot().await;
    let monday = monday_of(Local::now().date_naive());

    let days = week_sequence(monday)
        .into_iter()
        .map(|slot| {
            let date = slot.iso();
            DaySchedule {
                day: slot.day,
                tasks: events_on(&tasks, &date).into_iter().cloned().collect(),
                meetings: events_on(&meetings, &date).into_iter().cloned().collect(),
                date,
            }
        })
        .collect();

    Ok(Json(days))
}

/// One cell of the 42-cell month grid with its event buckets.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSchedule {
    pub date: String,
    pub is_current_month: bool,
    pub is_today: bool,
    pub tasks: Vec<Event>,
    pub meetings: Vec<Event>,
}

/// GET /api/month/:year/:month - 42-cell grid; out-of-month cells carry
/// real dates and get the same bucketing
async fn month(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<Vec<CellSchedule>>, ApiError> {
    let today = Local::now().date_naive();
    let grid = month_grid(year, month, today)
        .ok_or_else(|| ValidationError::InvalidDate(format!("{year:04}-{month:02}-01")))?;

    let (tasks, meetings) = state.store.snapshot().await;

    let cells = grid
        .into_iter()
        .map(|cell| {
            let date = cell.iso();
            CellSchedule {
                is_current_month: cell.in_month,
                is_today: cell.is_today,
                tasks: events_on(&tasks, &date).into_iter().cloned().collect(),
                meetings: events_on(&meetings, &date).into_iter().cloned().collect(),
                date,
            }
        })
        .collect();

    Ok(Json(cells))
}
