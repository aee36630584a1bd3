//! Handlers for the `/session` resource (start a persona session, inspect it).

use autocare_core::persona::{DashboardView, Persona};
use autocare_events::{event_types, PlatformEvent};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::PersonaSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /session`.
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub persona: String,
}

/// Response for `POST /session`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStarted {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub persona: Persona,
    pub home_route: &'static str,
}

/// Response for `GET /session`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    pub persona: Persona,
    pub home_route: &'static str,
    pub views: &'static [DashboardView],
    /// UTC Unix timestamp.
    pub expires_at: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/session
///
/// Start a session acting as the given persona.
pub async fn start_session(
    State(state): State<AppState>,
    AppJson(input): AppJson<StartSessionRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionStarted>>)> {
    let persona = Persona::parse(&input.persona)?;

    let (access_token, claims) = generate_session_token(persona, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Failed to sign session token: {e}")))?;

    tracing::info!(session_id = %claims.sub, persona = persona.as_str(), "Session started");
    state.event_bus.publish(
        PlatformEvent::new(event_types::SESSION_STARTED)
            .with_source("session", claims.sub.clone())
            .with_actor(persona.as_str()),
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SessionStarted {
                access_token,
                expires_in: state.config.jwt.expires_in_secs(),
                persona,
                home_route: persona.home_route(),
            },
        }),
    ))
}

/// GET /api/v1/session
///
/// Describe the current session: persona, landing route, and visible views.
pub async fn current_session(session: PersonaSession) -> Json<DataResponse<SessionInfo>> {
    Json(DataResponse {
        data: SessionInfo {
            session_id: session.session_id,
            persona: session.persona,
            home_route: session.persona.home_route(),
            views: session.persona.views(),
            expires_at: session.expires_at,
        },
    })
}
