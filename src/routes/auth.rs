//! Authentication endpoints

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// POST /auth/login - Exchange demo credentials for a bearer token
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.username != state.config.demo_username || req.password != state.config.demo_password {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.gate.issue_token(&req.username)?;
    Ok(Json(LoginResponse {
        token,
        username: req.username,
    }))
}
