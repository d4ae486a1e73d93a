//! Wire types for the schedule-sharing backend.
//!
//! The backend expects local wall-clock date/time strings plus a separate
//! IANA timezone identifier — no UTC offsets anywhere. Slot fields are
//! camelCase on the wire; the `selected_slots` key on fetched records is
//! snake_case, matching the backend's own spelling.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::compress::SlotRange;

/// One shareable date/time range: `date` as `yyyy-MM-dd`, times as 24-hour
/// `HH:mm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareableSlot {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl ShareableSlot {
    /// Format a wall-clock range into the wire representation.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            date: start.format("%Y-%m-%d").to_string(),
            start_time: start.format("%H:%M").to_string(),
            end_time: end.format("%H:%M").to_string(),
        }
    }
}

/// The outbound schedule payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareableSchedule {
    pub slots: Vec<ShareableSlot>,
    /// IANA identifier, e.g. "America/Mexico_City".
    pub timezone: String,
}

/// Lifecycle status of a schedule on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// A schedule record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub slots: Vec<ShareableSlot>,
    pub timezone: String,
    pub status: ScheduleStatus,
    #[serde(default)]
    pub selected_slots: Option<Vec<ShareableSlot>>,
}

/// Project compressed ranges into the outbound payload, tagged with the
/// given timezone identifier. Pure projection; no I/O.
pub fn export_schedule(ranges: &[SlotRange], timezone: Tz) -> ShareableSchedule {
    ShareableSchedule {
        slots: ranges
            .iter()
            .map(|range| ShareableSlot::new(range.start, range.end))
            .collect(),
        timezone: timezone.name().to_string(),
    }
}
