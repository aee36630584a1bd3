//! Defect analysis request assembly.
//!
//! Combines a part's statistics with its classification into the flat record
//! handed to the manufacturer side, and runs the validate, classify, gate
//! sequence for single parts and for whole part lists.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::escalation::{evaluate_escalation, EscalationGate};
use crate::failure_pattern::{classify, FailurePattern, FailurePatternType, Recommendation};
use crate::part_failure::{validate_statistics, PartFailureStatistics};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// DefectAnalysisRequest
// ---------------------------------------------------------------------------

/// Outbound defect analysis record.
///
/// Every statistics field at the top level, plus the classification under
/// the dashboard's names and the time the record was assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectAnalysisRequest {
    #[serde(flatten)]
    pub statistics: PartFailureStatistics,
    pub failure_pattern: FailurePatternType,
    pub ai_confidence: f64,
    pub recommended_action: Recommendation,
    pub priority: f64,
    pub timestamp: Timestamp,
}

/// Build the outbound record for a classified part.
///
/// Performs no validation; `stats` is expected to have passed
/// [`validate_statistics`]. The result owns copies of both inputs.
pub fn build_analysis_request(
    stats: &PartFailureStatistics,
    pattern: &FailurePattern,
) -> DefectAnalysisRequest {
    DefectAnalysisRequest {
        statistics: stats.clone(),
        failure_pattern: pattern.pattern_type,
        ai_confidence: pattern.confidence,
        recommended_action: pattern.recommendation,
        priority: pattern.priority,
        timestamp: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// PartAnalysis
// ---------------------------------------------------------------------------

/// A validated part together with its classification and gate outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartAnalysis {
    pub statistics: PartFailureStatistics,
    pub pattern: FailurePattern,
    pub auto_escalate: bool,
    pub blocked_by: Vec<EscalationGate>,
}

impl PartAnalysis {
    /// Build the outbound record for this part.
    pub fn to_request(&self) -> DefectAnalysisRequest {
        build_analysis_request(&self.statistics, &self.pattern)
    }
}

/// Validate, classify, and gate a single part.
pub fn analyze(stats: PartFailureStatistics) -> Result<PartAnalysis, CoreError> {
    validate_statistics(&stats)?;
    let pattern = classify(&stats);
    let decision = evaluate_escalation(&stats, &pattern);
    Ok(PartAnalysis {
        auto_escalate: decision.is_escalated(),
        blocked_by: decision.blocked_by,
        statistics: stats,
        pattern,
    })
}

/// Analyze a list of parts, most urgent first.
///
/// Every record is validated before any is classified; the first invalid one
/// fails the whole call and is reported by index. Equal priorities keep
/// their input order.
pub fn analyze_batch(parts: Vec<PartFailureStatistics>) -> Result<Vec<PartAnalysis>, CoreError> {
    for (index, stats) in parts.iter().enumerate() {
        validate_statistics(stats).map_err(|err| match err {
            CoreError::Validation(msg) => CoreError::Validation(format!("parts[{index}]: {msg}")),
            other => other,
        })?;
    }

    let mut analyses = parts
        .into_iter()
        .map(analyze)
        .collect::<Result<Vec<_>, _>>()?;
    analyses.sort_by(|a, b| b.pattern.priority.total_cmp(&a.pattern.priority));
    Ok(analyses)
}
