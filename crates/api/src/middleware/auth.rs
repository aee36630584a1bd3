//! Session extractor for Axum handlers.

use autocare_core::error::CoreError;
use autocare_core::persona::Persona;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Session extracted from a Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(session: PersonaSession) -> AppResult<Json<()>> {
///     tracing::info!(persona = session.persona.as_str(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PersonaSession {
    /// Session id (`claims.sub`).
    pub session_id: String,
    /// Persona the session acts as.
    pub persona: Persona,
    /// Expiration time (UTC Unix timestamp).
    pub expires_at: i64,
}

impl FromRequestParts<AppState> for PersonaSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(PersonaSession {
            session_id: claims.sub,
            persona: claims.persona,
            expires_at: claims.exp,
        })
    }
}
