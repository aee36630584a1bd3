//! Telemetry sink that writes events to the tracing pipeline.
//!
//! [`EventLogger`] subscribes to the [`EventBus`](crate::bus::EventBus) and
//! emits one structured `tracing` record per [`PlatformEvent`]. Whatever
//! subscriber the binary installs (plain text or JSON) decides where the
//! records end up.

use tokio::sync::broadcast;

use crate::bus::PlatformEvent;

/// Background service that logs every platform event.
pub struct EventLogger;

impl EventLogger {
    /// Run the logging loop until the bus is dropped.
    ///
    /// Returns the number of events logged. Lagged events are counted as
    /// lost and reported with a warning.
    pub async fn run(mut receiver: broadcast::Receiver<PlatformEvent>) -> u64 {
        let mut logged = 0u64;
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    Self::log(&event);
                    logged += 1;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event logger lagged, some events were not logged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!(logged, "Event bus closed, event logger shutting down");
                    break;
                }
            }
        }
        logged
    }

    fn log(event: &PlatformEvent) {
        tracing::info!(
            target: "autocare_events::track",
            event_type = %event.event_type,
            source_entity_type = event.source_entity_type.as_deref().unwrap_or(""),
            source_entity_id = event.source_entity_id.as_deref().unwrap_or(""),
            actor_persona = event.actor_persona.as_deref().unwrap_or(""),
            timestamp = %event.timestamp.to_rfc3339(),
            payload = %event.payload,
            "track"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::EventBus;

    #[tokio::test]
    async fn logs_until_bus_is_dropped() {
        let bus = EventBus::default();
        let handle = tokio::spawn(EventLogger::run(bus.subscribe()));

        bus.publish(PlatformEvent::new("session.started").with_actor("customer"));
        bus.publish(PlatformEvent::new("defect_analysis.classified").with_source("part", "P-1"));
        drop(bus);

        let logged = handle.await.expect("logger task should not panic");
        assert_eq!(logged, 2);
    }

    #[tokio::test]
    async fn survives_lag() {
        let bus = EventBus::new(2);
        let rx = bus.subscribe();
        for i in 0..5 {
            bus.publish(PlatformEvent::new(format!("burst.{i}")));
        }
        drop(bus);

        // The two most recent events survive; the rest are reported as lag.
        let logged = EventLogger::run(rx).await;
        assert_eq!(logged, 2);
    }
}
