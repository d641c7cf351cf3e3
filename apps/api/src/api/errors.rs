use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;
use crate::domain::errors::RegistrationError;

/// API error type with HTTP status code and message
///
/// Validation failures also carry a machine-readable `code` and, where
/// relevant, the offending field, the conflicting team's name, or the team
/// reference that did not resolve.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<&'static str>,
    pub field: Option<&'static str>,
    pub team: Option<String>,
    pub team_id: Option<String>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
            field: None,
            team: None,
            team_id: None,
        }
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.message
        });

        if let Some(code) = self.code {
            body["code"] = json!(code);
        }
        if let Some(field) = self.field {
            body["field"] = json!(field);
        }
        if let Some(team) = self.team {
            body["team"] = json!(team);
        }
        if let Some(team_id) = self.team_id {
            body["team_id"] = json!(team_id);
        }

        (self.status, Json(body)).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        let status = if err.is_conflict() {
            StatusCode::CONFLICT
        } else {
            StatusCode::BAD_REQUEST
        };

        Self {
            status,
            message: err.to_string(),
            code: Some(err.code()),
            field: err.field(),
            team: err.team_name().map(str::to_string),
            team_id: err.team_ref().map(str::to_string),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            code: Some("invalid_body"),
            ..Self::new(rejection.status(), rejection.body_text())
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::unauthorized("Invalid credentials"),
            AuthError::InvalidToken(e) => Self::unauthorized(format!("Invalid token: {}", e)),
            AuthError::TokenLifetime => {
                tracing::error!("Configured session lifetime cannot be represented");
                Self::internal_server_error("Failed to create token")
            }
            AuthError::Hashing(e) => {
                tracing::error!("Password verification failed: {}", e);
                Self::internal_server_error("Password verification failed")
            }
        }
    }
}
