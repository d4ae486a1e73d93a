//! Event supplier boundary.
//!
//! The core never talks to a device calendar or a provider API; it consumes
//! whatever a [`EventSource`] hands it. The planner calls `fetch_events` once
//! per day build with a 24-hour window.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use slotshare_core::CalendarEvent;

use crate::error::Result;

/// A supplier of calendar events for a time window.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Request read access to the underlying calendar. Returns `false` when
    /// the user declines; errors are reserved for source-internal failures.
    async fn request_access(&self) -> Result<bool>;

    /// All events overlapping `[window_start, window_end)`, unordered.
    async fn fetch_events(
        &self,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> Result<Vec<CalendarEvent>>;
}

/// In-memory event source backed by a fixed list.
///
/// Stands in for a real provider in tests and in the CLI, where events come
/// from a JSON fixture. Access is always granted unless configured otherwise.
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    events: Vec<CalendarEvent>,
    deny_access: bool,
}

impl StaticEventSource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            deny_access: false,
        }
    }

    /// A source whose access request is declined, for exercising the
    /// permission-denied path.
    pub fn denied() -> Self {
        Self {
            events: Vec::new(),
            deny_access: true,
        }
    }
}

#[async_trait]
impl EventSource for StaticEventSource {
    async fn request_access(&self) -> Result<bool> {
        Ok(!self.deny_access)
    }

    async fn fetch_events(
        &self,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> Result<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.start_date < window_end && event.end_date > window_start)
            .cloned()
            .collect())
    }
}
