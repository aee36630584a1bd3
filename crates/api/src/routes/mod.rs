pub mod defect_analysis;
pub mod health;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /session                          start session (POST), current session (GET)
///
/// /defect-analysis/classify         classify one part (POST)
/// /defect-analysis/requests         build outbound request (POST)
/// /defect-analysis/batch            analyze a part list (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(session::router())
        .nest("/defect-analysis", defect_analysis::router())
}
