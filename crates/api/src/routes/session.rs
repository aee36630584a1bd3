//! Route definitions for the `/session` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Session routes, merged into `api_routes()`.
///
/// ```text
/// POST /session    -> start_session
/// GET  /session    -> current_session (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/session",
        post(session::start_session).get(session::current_session),
    )
}
