//! Autocare domain logic.
//!
//! Pure, stateless building blocks for part-failure defect analysis:
//!
//! - [`part_failure`] -- input statistics and their validation.
//! - [`failure_pattern`] -- the pattern classifier.
//! - [`escalation`] -- the auto-escalation gate.
//! - [`defect_analysis`] -- outbound request assembly and batch analysis.
//! - [`persona`] -- dashboard personas and their routing table.

pub mod defect_analysis;
pub mod error;
pub mod escalation;
pub mod failure_pattern;
pub mod part_failure;
pub mod persona;
pub mod threshold_validation;
pub mod types;
