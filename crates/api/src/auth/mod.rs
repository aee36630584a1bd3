//! Session primitives.
//!
//! - [`jwt`] -- persona session token generation and validation.

pub mod jwt;
