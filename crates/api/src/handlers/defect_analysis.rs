//! Handlers for part-failure defect analysis.
//!
//! Classification, outbound request assembly, and list analysis for the
//! service-center and manufacturer dashboards. All decisions are made by
//! `autocare_core`; these handlers add session checks and telemetry.

use autocare_core::defect_analysis::{self, DefectAnalysisRequest, PartAnalysis};
use autocare_core::error::CoreError;
use autocare_core::escalation::EscalationGate;
use autocare_core::failure_pattern::FailurePattern;
use autocare_core::part_failure::PartFailureStatistics;
use autocare_events::{event_types, PlatformEvent};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::persona::RequireDefectAnalyst;
use crate::response::DataResponse;
use crate::state::AppState;

/// Upper bound on parts per batch request.
pub const MAX_BATCH_PARTS: usize = 500;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Response for `POST /defect-analysis/classify`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResponse {
    pub pattern: FailurePattern,
    pub auto_escalate: bool,
    pub blocked_by: Vec<EscalationGate>,
}

/// Response for `POST /defect-analysis/requests`: the outbound record plus
/// the gate outcome, flat.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectAnalysisResponse {
    #[serde(flatten)]
    pub request: DefectAnalysisRequest,
    pub auto_escalate: bool,
}

/// Request body for `POST /defect-analysis/batch`.
#[derive(Debug, Deserialize)]
pub struct BatchAnalysisInput {
    pub parts: Vec<PartFailureStatistics>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/defect-analysis/classify
///
/// Classify one part and report whether it would auto-escalate.
pub async fn classify(
    State(state): State<AppState>,
    RequireDefectAnalyst(session): RequireDefectAnalyst,
    AppJson(stats): AppJson<PartFailureStatistics>,
) -> AppResult<Json<DataResponse<ClassificationResponse>>> {
    let analysis = defect_analysis::analyze(stats)?;

    tracing::debug!(
        part_id = %analysis.statistics.part_id,
        pattern = analysis.pattern.pattern_type.as_str(),
        confidence = analysis.pattern.confidence,
        priority = analysis.pattern.priority,
        auto_escalate = analysis.auto_escalate,
        "Part classified"
    );
    state.event_bus.publish(
        analysis_event(event_types::DEFECT_ANALYSIS_CLASSIFIED, &analysis)
            .with_actor(session.persona.as_str()),
    );

    Ok(Json(DataResponse {
        data: ClassificationResponse {
            pattern: analysis.pattern,
            auto_escalate: analysis.auto_escalate,
            blocked_by: analysis.blocked_by,
        },
    }))
}

/// POST /api/v1/defect-analysis/requests
///
/// Build the outbound defect analysis record for one part. The record is
/// built whether or not the gate passes (a manual send); the response says
/// which it was.
pub async fn create_request(
    State(state): State<AppState>,
    RequireDefectAnalyst(session): RequireDefectAnalyst,
    AppJson(stats): AppJson<PartFailureStatistics>,
) -> AppResult<Json<DataResponse<DefectAnalysisResponse>>> {
    let analysis = defect_analysis::analyze(stats)?;
    let request = analysis.to_request();
    let persona = session.persona.as_str();

    tracing::info!(
        part_id = %request.statistics.part_id,
        pattern = request.failure_pattern.as_str(),
        recommended_action = request.recommended_action.as_str(),
        priority = request.priority,
        auto_escalate = analysis.auto_escalate,
        persona,
        "Defect analysis request built"
    );

    state.event_bus.publish(
        analysis_event(event_types::DEFECT_ANALYSIS_REQUESTED, &analysis).with_actor(persona),
    );
    if analysis.auto_escalate {
        state.event_bus.publish(
            analysis_event(event_types::DEFECT_ANALYSIS_AUTO_ESCALATED, &analysis)
                .with_actor(persona),
        );
    }

    Ok(Json(DataResponse {
        data: DefectAnalysisResponse {
            request,
            auto_escalate: analysis.auto_escalate,
        },
    }))
}

/// POST /api/v1/defect-analysis/batch
///
/// Analyze a list of parts, most urgent first. One invalid record rejects
/// the whole batch.
pub async fn analyze_batch(
    State(state): State<AppState>,
    RequireDefectAnalyst(session): RequireDefectAnalyst,
    AppJson(input): AppJson<BatchAnalysisInput>,
) -> AppResult<Json<DataResponse<Vec<PartAnalysis>>>> {
    if input.parts.len() > MAX_BATCH_PARTS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_BATCH_PARTS} parts per batch, got {}",
            input.parts.len()
        ))
        .into());
    }

    let analyses = defect_analysis::analyze_batch(input.parts)?;
    let escalated = analyses.iter().filter(|a| a.auto_escalate).count();

    tracing::info!(
        parts = analyses.len(),
        escalated,
        persona = session.persona.as_str(),
        "Batch defect analysis complete"
    );
    for analysis in &analyses {
        state.event_bus.publish(
            analysis_event(event_types::DEFECT_ANALYSIS_CLASSIFIED, analysis)
                .with_actor(session.persona.as_str()),
        );
    }

    Ok(Json(DataResponse { data: analyses }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Telemetry event describing one analysed part.
fn analysis_event(event_type: &str, analysis: &PartAnalysis) -> PlatformEvent {
    PlatformEvent::new(event_type)
        .with_source("part", analysis.statistics.part_id.clone())
        .with_payload(json!({
            "partNumber": analysis.statistics.part_number,
            "severity": analysis.statistics.severity.as_str(),
            "defectCategory": analysis.statistics.defect_category.as_str(),
            "failurePattern": analysis.pattern.pattern_type.as_str(),
            "confidence": analysis.pattern.confidence,
            "priority": analysis.pattern.priority,
            "autoEscalate": analysis.auto_escalate,
        }))
}
