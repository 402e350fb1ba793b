pub mod auth;
pub mod calendar;
pub mod events;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use weekplan_core::ValidationError;

use crate::auth::AuthError;
use crate::store::StoreError;

/// Standard API error body: human message plus an optional
/// machine-readable code.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

#[derive(Debug)]
pub enum ApiError {
    Auth(AuthError),
    Store(StoreError),
    InvalidCredentials,
    Internal(anyhow::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Store(StoreError::Validation(err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, code) = match self {
            ApiError::Auth(err) => (StatusCode::UNAUTHORIZED, err.to_string(), Some(err.code())),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials".to_string(),
                Some("INVALID_CREDENTIALS"),
            ),
            ApiError::Store(StoreError::NotFound(kind)) => {
                (StatusCode::NOT_FOUND, format!("{kind} not found"), None)
            }
            ApiError::Store(StoreError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string(), None)
            }
            ApiError::Store(err) => {
                log::error!("store failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            ApiError::Internal(err) => {
                log::error!("internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error, code })).into_response()
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Route not found".to_string(),
            code: None,
        }),
    )
        .into_response()
}
