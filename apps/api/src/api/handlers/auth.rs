use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form_field;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::AuthError;

/// Request body for admin login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "form_field")]
    pub username: String,
    #[serde(default, deserialize_with = "form_field")]
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// When the admin last logged in; `null` on first access
    pub previous_login: Option<DateTime<Utc>>,
}

/// Login as the tournament administrator
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;
    let previous_login = state
        .admin
        .login(&req.username, &req.password)
        .await
        .inspect_err(|e| {
            if matches!(e, AuthError::InvalidCredentials) {
                tracing::warn!(username = %req.username, "Rejected admin login");
            }
        })?;

    let token = create_token(state.admin.username(), &state.tokens.secret, state.tokens.ttl)?;

    tracing::info!(username = %req.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.tokens.ttl.num_seconds(),
        previous_login,
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
