//! Persona-based access extractors.
//!
//! Each extractor wraps [`PersonaSession`] and rejects sessions whose persona
//! the routing table does not allow.

use autocare_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::PersonaSession;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a persona that may run defect analysis. Rejects with 403 otherwise.
///
/// ```ignore
/// async fn analyze(RequireDefectAnalyst(session): RequireDefectAnalyst) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireDefectAnalyst(pub PersonaSession);

impl FromRequestParts<AppState> for RequireDefectAnalyst {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = PersonaSession::from_request_parts(parts, state).await?;
        if !session.persona.can_analyze_defects() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Service or Manufacturer persona required".into(),
            )));
        }
        Ok(RequireDefectAnalyst(session))
    }
}
