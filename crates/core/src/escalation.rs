//! Auto-escalation gate.
//!
//! Decides whether a classified part goes straight to the manufacturer
//! without human sign-off. Four independent gates must all pass; there is no
//! weighting and no partial credit. The gate only decides; callers perform
//! the escalation.

use serde::Serialize;

use crate::failure_pattern::FailurePattern;
use crate::part_failure::PartFailureStatistics;

/// Minimum classifier confidence for auto-escalation.
pub const ESCALATION_MIN_CONFIDENCE: f64 = 85.0;

/// Minimum priority for auto-escalation.
pub const ESCALATION_MIN_PRIORITY: f64 = 80.0;

/// One of the four conditions that can hold back an escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationGate {
    /// Confidence below [`ESCALATION_MIN_CONFIDENCE`].
    Confidence,
    /// Pattern is `isolated`.
    PatternType,
    /// Priority below [`ESCALATION_MIN_PRIORITY`].
    Priority,
    /// Severity is `medium` or `low`.
    Severity,
}

/// Outcome of evaluating every gate, including which ones blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EscalationDecision {
    /// Gates that failed, in evaluation order. Empty means escalate.
    pub blocked_by: Vec<EscalationGate>,
}

impl EscalationDecision {
    pub fn is_escalated(&self) -> bool {
        self.blocked_by.is_empty()
    }
}

/// Evaluate all four gates and report the ones that failed.
pub fn evaluate_escalation(
    stats: &PartFailureStatistics,
    pattern: &FailurePattern,
) -> EscalationDecision {
    let mut blocked_by = Vec::new();
    if pattern.confidence < ESCALATION_MIN_CONFIDENCE {
        blocked_by.push(EscalationGate::Confidence);
    }
    if !pattern.pattern_type.is_systemic() {
        blocked_by.push(EscalationGate::PatternType);
    }
    if pattern.priority < ESCALATION_MIN_PRIORITY {
        blocked_by.push(EscalationGate::Priority);
    }
    if !stats.severity.is_escalation_grade() {
        blocked_by.push(EscalationGate::Severity);
    }
    EscalationDecision { blocked_by }
}

/// Whether the part should be forwarded to the manufacturer automatically.
///
/// True iff confidence >= 85, the pattern is `recurring` or `batch_issue`,
/// priority >= 80, and severity is `critical` or `high`.
pub fn should_auto_escalate(stats: &PartFailureStatistics, pattern: &FailurePattern) -> bool {
    evaluate_escalation(stats, pattern).is_escalated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure_pattern::{classify, FailurePatternType, Recommendation};
    use crate::part_failure::tests::sample_stats;
    use crate::part_failure::Severity;

    fn pattern(pattern_type: FailurePatternType, confidence: f64, priority: f64) -> FailurePattern {
        FailurePattern {
            pattern_type,
            confidence,
            recommendation: Recommendation::SendToManufacturer,
            priority,
        }
    }

    fn with_severity(severity: Severity) -> PartFailureStatistics {
        PartFailureStatistics {
            severity,
            ..sample_stats()
        }
    }

    #[test]
    fn all_gates_pass() {
        let stats = with_severity(Severity::Critical);
        assert!(should_auto_escalate(
            &stats,
            &pattern(FailurePatternType::Recurring, 85.0, 80.0)
        ));
        assert!(should_auto_escalate(
            &stats,
            &pattern(FailurePatternType::BatchIssue, 95.0, 110.0)
        ));
    }

    #[test]
    fn isolated_never_escalates() {
        for severity in [Severity::Critical, Severity::High] {
            let decision = evaluate_escalation(
                &with_severity(severity),
                &pattern(FailurePatternType::Isolated, 100.0, 100.0),
            );
            assert!(!decision.is_escalated());
            assert_eq!(decision.blocked_by, vec![EscalationGate::PatternType]);
        }
    }

    #[test]
    fn medium_and_low_severity_block() {
        for severity in [Severity::Medium, Severity::Low] {
            let decision = evaluate_escalation(
                &with_severity(severity),
                &pattern(FailurePatternType::BatchIssue, 95.0, 95.0),
            );
            assert_eq!(decision.blocked_by, vec![EscalationGate::Severity]);
        }
    }

    #[test]
    fn confidence_just_below_threshold_blocks() {
        let decision = evaluate_escalation(
            &with_severity(Severity::High),
            &pattern(FailurePatternType::Recurring, 84.99, 90.0),
        );
        assert_eq!(decision.blocked_by, vec![EscalationGate::Confidence]);
    }

    #[test]
    fn priority_just_below_threshold_blocks() {
        let decision = evaluate_escalation(
            &with_severity(Severity::High),
            &pattern(FailurePatternType::Recurring, 90.0, 79.9),
        );
        assert_eq!(decision.blocked_by, vec![EscalationGate::Priority]);
    }

    #[test]
    fn reports_every_failing_gate_in_order() {
        let decision = evaluate_escalation(
            &with_severity(Severity::Low),
            &pattern(FailurePatternType::Isolated, 50.0, 30.0),
        );
        assert_eq!(
            decision.blocked_by,
            vec![
                EscalationGate::Confidence,
                EscalationGate::PatternType,
                EscalationGate::Priority,
                EscalationGate::Severity,
            ]
        );
    }

    #[test]
    fn recurring_with_medium_severity_is_classified_but_not_escalated() {
        let stats = PartFailureStatistics {
            failure_count: 4,
            failure_rate: 18.0,
            affected_vehicles: 3,
            severity: Severity::Medium,
            ..sample_stats()
        };
        let classified = classify(&stats);
        assert_eq!(classified.pattern_type, FailurePatternType::Recurring);
        assert_eq!(
            classified.recommendation,
            Recommendation::SendToManufacturer
        );
        assert!(!should_auto_escalate(&stats, &classified));
    }
}
