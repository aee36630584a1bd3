//! Session and persona extractors.
//!
//! - [`auth::PersonaSession`] -- Extracts the session from a Bearer token.
//! - [`persona::RequireDefectAnalyst`] -- Requires a persona allowed to run
//!   defect analysis (service or manufacturer).

pub mod auth;
pub mod persona;
