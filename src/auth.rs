//! JWT access gate.
//!
//! Issues HS256 bearer tokens against the configured demo credentials and
//! verifies them on every event-store route. The three rejection cases
//! stay distinct so clients can tell "log in" apart from "log in again":
//! no token at all, an expired token, and a malformed/invalid one.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routes::ApiError;
use crate::state::AppState;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Access token required")]
    Missing,

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Malformed,
}

impl AuthError {
    /// Machine-readable sub-code for client messaging.
    pub fn code(self) -> &'static str {
        match self {
            AuthError::Missing => "NO_TOKEN",
            AuthError::Expired => "TOKEN_EXPIRED",
            AuthError::Malformed => "INVALID_TOKEN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct AccessGate {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl AccessGate {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        let mut validation = Validation::default();
        // Expiry is exact; the default 60s leeway would blur the
        // expired/valid boundary
        validation.leeway = 0;

        AccessGate {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn issue_token(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::Malformed)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Malformed,
            })
    }
}

/// Authenticated caller, extracted from the `Authorization` header.
///
/// Accepts both `Bearer <token>` and a bare token, matching what the web
/// client sends.
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::Missing)?;

        let token = header.strip_prefix("Bearer ").unwrap_or(header);
        if token.is_empty() {
            return Err(AuthError::Missing.into());
        }

        let claims = state.gate.verify(token)?;
        Ok(AuthUser(claims))
    }
}
