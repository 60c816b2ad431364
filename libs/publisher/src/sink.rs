//! Telemetry sink port and an in-memory implementation.

use std::sync::Mutex;

use async_trait::async_trait;
use idsight_events::AnalyticsEvent;

/// Telemetry sink interface.
///
/// Fire-and-forget: delivery, buffering, and failure handling belong to
/// the implementation. The shaper never consults a publish outcome.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Accepts one shaped analytics event.
    async fn publish(&self, event: AnalyticsEvent);
}

/// Sink that retains published events, for tests and development.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything published so far.
    pub fn published(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("events mutex poisoned").clone()
    }

    /// Number of events published so far.
    pub fn len(&self) -> usize {
        self.events.lock().expect("events mutex poisoned").len()
    }

    /// True if nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn publish(&self, event: AnalyticsEvent) {
        self.events.lock().expect("events mutex poisoned").push(event);
    }
}
