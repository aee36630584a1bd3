//! Part failure statistics: the input to defect analysis.
//!
//! A [`PartFailureStatistics`] record aggregates the failures observed for one
//! part over an observation window, as reported by a service center's
//! part-return workflow. Records are immutable once built; every analysis
//! function borrows them.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::threshold_validation::{into_core_error, validate_finite, validate_percentage};

// ---------------------------------------------------------------------------
// DefectCategory
// ---------------------------------------------------------------------------

/// Root-cause category assigned to a part defect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectCategory {
    Manufacturing,
    Design,
    Material,
    #[default]
    Unknown,
}

impl DefectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefectCategory::Manufacturing => "manufacturing",
            DefectCategory::Design => "design",
            DefectCategory::Material => "material",
            DefectCategory::Unknown => "unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Human-assigned severity of a part failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Whether this severity is serious enough to skip manual review.
    pub fn is_escalation_grade(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

// ---------------------------------------------------------------------------
// PartFailureStatistics
// ---------------------------------------------------------------------------

/// Aggregate failure statistics for a single part.
///
/// Field bounds are declared with `validator`; call [`validate_statistics`]
/// (or build via [`parse_statistics`]) before classifying untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartFailureStatistics {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub part_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub part_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub part_number: String,
    /// Failures observed within the observation window.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub failure_count: i64,
    /// Failure percentage in `[0, 100]`.
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub failure_rate: f64,
    /// Average days until failure.
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub time_to_failure: f64,
    /// Manufacturing batch the failures trace back to, if known.
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty when present"))]
    pub batch_number: Option<String>,
    /// Distinct vehicles exhibiting the failure.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub affected_vehicles: i64,
    pub failure_type: String,
    #[serde(default)]
    pub defect_category: DefectCategory,
    pub severity: Severity,
}

impl PartFailureStatistics {
    /// Whether the failures are traceable to a manufacturing batch.
    pub fn is_batch_traceable(&self) -> bool {
        self.batch_number.is_some()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a statistics record.
///
/// Runs the declared field rules, then rejects non-finite floats, which the
/// range rules let through.
pub fn validate_statistics(stats: &PartFailureStatistics) -> Result<(), CoreError> {
    stats.validate().map_err(into_core_error)?;
    validate_percentage(stats.failure_rate, "failure_rate")?;
    validate_finite(stats.time_to_failure, "time_to_failure")?;
    Ok(())
}

/// Deserialize and validate a statistics record from JSON.
///
/// A missing required field (e.g. `severity`) or an unknown enum value is a
/// validation error, as is any out-of-range number.
pub fn parse_statistics(value: serde_json::Value) -> Result<PartFailureStatistics, CoreError> {
    let stats: PartFailureStatistics = serde_json::from_value(value)
        .map_err(|e| CoreError::Validation(format!("Invalid part failure statistics: {e}")))?;
    validate_statistics(&stats)?;
    Ok(stats)
}
