//! Route definitions for part-failure defect analysis.
//!
//! ```text
//! /classify     classify one part (POST)
//! /requests     build the outbound defect analysis request (POST)
//! /batch        analyze a list of parts, most urgent first (POST)
//! ```
//!
//! All routes require a service or manufacturer session.

use axum::routing::post;
use axum::Router;

use crate::handlers::defect_analysis;
use crate::state::AppState;

/// Defect analysis routes nested at `/defect-analysis`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/classify", post(defect_analysis::classify))
        .route("/requests", post(defect_analysis::create_request))
        .route("/batch", post(defect_analysis::analyze_batch))
}
