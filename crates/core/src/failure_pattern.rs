//! Failure pattern classification.
//!
//! Maps the aggregate statistics of one part onto a pattern type, a
//! confidence score, a priority score, and a recommended action. The rules
//! are evaluated in a fixed order and the first match wins; their ranges
//! overlap, so the order is itself the tie-break (batch evidence dominates
//! recurrence evidence).

use serde::{Deserialize, Serialize};

use crate::part_failure::PartFailureStatistics;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound for the confidence of the batch and recurring rules.
pub const MAX_RULE_CONFIDENCE: f64 = 95.0;

/// Batch rule: minimum failure count.
pub const BATCH_MIN_FAILURES: i64 = 5;
/// Batch rule: failure rate must exceed this percentage.
pub const BATCH_MIN_RATE: f64 = 20.0;

/// Recurring rule: minimum failure count.
pub const RECURRING_MIN_FAILURES: i64 = 3;
/// Recurring rule: failure rate must exceed this percentage.
pub const RECURRING_MIN_RATE: f64 = 15.0;
/// Recurring rule: minimum number of distinct affected vehicles.
pub const RECURRING_MIN_VEHICLES: i64 = 3;

/// Low-severity isolated rule: maximum failure count.
pub const ISOLATED_MAX_FAILURES: i64 = 2;
/// Low-severity isolated rule: failure rate must stay below this percentage.
pub const ISOLATED_MAX_RATE: f64 = 10.0;

// ---------------------------------------------------------------------------
// FailurePatternType
// ---------------------------------------------------------------------------

/// Shape of the failure evidence for a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePatternType {
    /// Repeated across several vehicles without batch traceability.
    Recurring,
    /// Traceable to a specific manufacturing batch.
    BatchIssue,
    /// Sparse failures treated as noise until corroborated.
    Isolated,
}

impl FailurePatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePatternType::Recurring => "recurring",
            FailurePatternType::BatchIssue => "batch_issue",
            FailurePatternType::Isolated => "isolated",
        }
    }

    /// Whether this pattern indicates a systemic defect.
    pub fn is_systemic(&self) -> bool {
        matches!(
            self,
            FailurePatternType::Recurring | FailurePatternType::BatchIssue
        )
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Action recommended for a classified part.
///
/// `NoAction` is part of the shared vocabulary with the dashboard but
/// [`classify`] never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    SendToManufacturer,
    Monitor,
    NoAction,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::SendToManufacturer => "send_to_manufacturer",
            Recommendation::Monitor => "monitor",
            Recommendation::NoAction => "no_action",
        }
    }
}

// ---------------------------------------------------------------------------
// FailurePattern
// ---------------------------------------------------------------------------

/// Result of classifying one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailurePattern {
    #[serde(rename = "type")]
    pub pattern_type: FailurePatternType,
    /// Confidence in `[0, 100]`.
    pub confidence: f64,
    pub recommendation: Recommendation,
    /// Urgency score. Nominally `[0, 100]` but not clamped: high counts or
    /// rates push the batch and recurring rules past 100.
    pub priority: f64,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify the failure pattern of a part.
///
/// Total over well-typed input. Rules, first match wins:
///
/// 1. Batch issue: batch known, `failure_count >= 5`, `failure_rate > 20`.
/// 2. Recurring: `failure_count >= 3`, `failure_rate > 15`,
///    `affected_vehicles >= 3`.
/// 3. Isolated, low: `failure_count <= 2`, `failure_rate < 10`.
/// 4. Isolated, default band.
pub fn classify(stats: &PartFailureStatistics) -> FailurePattern {
    let count = stats.failure_count;
    let rate = stats.failure_rate;

    if stats.is_batch_traceable() && count >= BATCH_MIN_FAILURES && rate > BATCH_MIN_RATE {
        return FailurePattern {
            pattern_type: FailurePatternType::BatchIssue,
            confidence: MAX_RULE_CONFIDENCE.min(70.0 + rate / 2.0),
            recommendation: Recommendation::SendToManufacturer,
            priority: 90.0 + rate / 10.0,
        };
    }

    if count >= RECURRING_MIN_FAILURES
        && rate > RECURRING_MIN_RATE
        && stats.affected_vehicles >= RECURRING_MIN_VEHICLES
    {
        return FailurePattern {
            pattern_type: FailurePatternType::Recurring,
            confidence: MAX_RULE_CONFIDENCE.min(65.0 + count as f64 * 5.0 + rate / 2.0),
            recommendation: Recommendation::SendToManufacturer,
            priority: 80.0 + count as f64 * 3.0,
        };
    }

    if count <= ISOLATED_MAX_FAILURES && rate < ISOLATED_MAX_RATE {
        return FailurePattern {
            pattern_type: FailurePatternType::Isolated,
            confidence: 50.0,
            recommendation: Recommendation::Monitor,
            priority: 30.0,
        };
    }

    FailurePattern {
        pattern_type: FailurePatternType::Isolated,
        confidence: 60.0,
        recommendation: Recommendation::Monitor,
        priority: 50.0,
    }
}
