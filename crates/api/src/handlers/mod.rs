//! Request handlers.
//!
//! Handlers stay thin: they extract, delegate to `autocare_core`, publish
//! telemetry, and wrap the result in [`DataResponse`](crate::response::DataResponse).

pub mod defect_analysis;
pub mod session;
