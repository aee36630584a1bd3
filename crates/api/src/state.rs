use std::sync::Arc;

use autocare_events::EventBus;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the session extractor).
    pub config: Arc<ServerConfig>,
    /// Telemetry event bus.
    pub event_bus: Arc<EventBus>,
}
