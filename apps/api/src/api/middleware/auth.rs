use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::verify_token;

/// Bearer-token guard for the registration routes
///
/// Resolves to the authenticated admin's username.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     AdminAuth(username): AdminAuth,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello {}", username))
/// }
/// ```
pub struct AdminAuth(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        let claims = verify_token(token, &state.tokens.secret)?;

        if claims.sub != state.admin.username() {
            return Err(ApiError::unauthorized("Unknown account"));
        }

        Ok(AdminAuth(claims.sub))
    }
}
