//! Calendar event input records.
//!
//! Events arrive from an external supplier (a device calendar, a provider API,
//! a JSON fixture) and are read-only to this crate. Bounds are *not* trusted:
//! `start_date < end_date` is assumed but not guaranteed, so the overlay pass
//! clips defensively and a malformed event simply contributes no slots.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single calendar event as supplied by the event source.
///
/// Datetimes are naive local wall-clock values — the builder works entirely in
/// the user's local day, and the shareable payload carries the timezone as a
/// separate identifier rather than offsetting individual instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Unique identifier within the supplier's namespace.
    pub id: String,
    pub title: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Display name of the calendar the event belongs to.
    pub calendar_title: String,
    /// Display color of that calendar (hex string, e.g. "#1A73E8").
    pub calendar_color: String,
}
