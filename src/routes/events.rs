//! Task and meeting CRUD endpoints.
//!
//! Tasks and meetings share one handler set, parameterized by `EventKind`
//! via an extension layer; the two resource prefixes mount the same
//! router. Every route requires a valid bearer token.

use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router, extract::Path, extract::State};
use serde::Serialize;

use weekplan_core::{Event, EventDraft, EventKind, EventPatch};

use crate::auth::AuthUser;
use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/tasks", kind_router(EventKind::Task))
        .nest("/api/meetings", kind_router(EventKind::Meeting))
}

fn kind_router(kind: EventKind) -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(remove))
        .route("/{id}/toggle", post(toggle))
        .layer(Extension(kind))
}

/// GET /api/{kind} - All events of the kind, date then time ascending
async fn list(
    State(state): State<AppState>,
    Extension(kind): Extension<EventKind>,
    _user: AuthUser,
) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.store.list(kind).await))
}

/// POST /api/{kind} - Create a new event
async fn create(
    State(state): State<AppState>,
    Extension(kind): Extension<EventKind>,
    _user: AuthUser,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state.store.create(kind, draft).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/{kind}/:id - Partial update; only supplied fields change
async fn update(
    State(state): State<AppState>,
    Extension(kind): Extension<EventKind>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError> {
    let event = state.store.update(kind, &id, patch).await?;
    Ok(Json(event))
}

/// POST /api/{kind}/:id/toggle - Flip completion only
async fn toggle(
    State(state): State<AppState>,
    Extension(kind): Extension<EventKind>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let event = state.store.toggle_completed(kind, &id).await?;
    Ok(Json(event))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub event: Event,
}

/// DELETE /api/{kind}/:id - Remove and return the event
async fn remove(
    State(state): State<AppState>,
    Extension(kind): Extension<EventKind>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let event = state.store.delete(kind, &id).await?;
    Ok(Json(DeleteResponse {
        message: format!("{kind} deleted successfully"),
        event,
    }))
}
