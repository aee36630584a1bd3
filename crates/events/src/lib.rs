//! Autocare event bus and telemetry sink.
//!
//! - [`EventBus`] -- in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PlatformEvent`] -- the canonical event envelope.
//! - [`EventLogger`] -- background service that writes every event to the
//!   tracing pipeline.

pub mod bus;
pub mod logger;

pub use bus::{EventBus, PlatformEvent};
pub use logger::EventLogger;

/// Well-known event names.
pub mod event_types {
    pub const SESSION_STARTED: &str = "session.started";
    pub const DEFECT_ANALYSIS_CLASSIFIED: &str = "defect_analysis.classified";
    pub const DEFECT_ANALYSIS_REQUESTED: &str = "defect_analysis.requested";
    pub const DEFECT_ANALYSIS_AUTO_ESCALATED: &str = "defect_analysis.auto_escalated";
}
