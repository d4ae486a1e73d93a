//! Day-by-day availability planning session.
//!
//! Owns the current day's grid and the cross-day selection store, and drives
//! the event source. `load_day` returns an explicit [`DayState`] transition
//! instead of notifying through callbacks, so a UI (or a test) consumes the
//! outcome of each build directly from the call.
//!
//! The planner is a single-caller value: one grid build and one selection
//! session at a time, serial mutation, no locking.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;

use slotshare_core::{
    build_slots, compress_selections, day_start, export_schedule, selected_slots, SelectedSlot,
    SelectionStore, ShareableSchedule, SlotRange, TimeSlot,
};

use crate::source::EventSource;

/// Outcome of a day build.
///
/// `load_day` only ever returns the three terminal states; `Loading` exists
/// for callers that hold a state value while a build is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum DayState {
    Loading,
    Loaded(Vec<TimeSlot>),
    PermissionDenied,
    Failed(String),
}

/// A planning session over one event source.
pub struct DayPlanner<S: EventSource> {
    source: S,
    current_day: NaiveDate,
    slots: Vec<TimeSlot>,
    selections: SelectionStore,
}

impl<S: EventSource> DayPlanner<S> {
    pub fn new(source: S, initial_day: NaiveDate) -> Self {
        Self {
            source,
            current_day: initial_day,
            slots: Vec::new(),
            selections: SelectionStore::new(),
        }
    }

    pub fn current_day(&self) -> NaiveDate {
        self.current_day
    }

    /// The current day's grid; empty until a load succeeds.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Full date heading for the current day, e.g. "Monday, March 16, 2026".
    pub fn formatted_title(&self) -> String {
        self.current_day.format("%A, %B %-d, %Y").to_string()
    }

    /// Build the grid for `day`: request access, fetch the day's events,
    /// overlay them. On denial or failure the grid empties — stale slots from
    /// another day must not answer queries for this one.
    pub async fn load_day(&mut self, day: NaiveDate) -> DayState {
        self.current_day = day;

        let granted = match self.source.request_access().await {
            Ok(granted) => granted,
            Err(err) => {
                self.slots.clear();
                return DayState::Failed(err.to_string());
            }
        };
        if !granted {
            self.slots.clear();
            return DayState::PermissionDenied;
        }

        let window_start = day_start(day);
        let window_end = window_start + Duration::hours(24);

        match self.source.fetch_events(window_start, window_end).await {
            Ok(events) => {
                self.slots = build_slots(day, &events);
                DayState::Loaded(self.slots.clone())
            }
            Err(err) => {
                self.slots.clear();
                DayState::Failed(err.to_string())
            }
        }
    }

    pub async fn go_to_previous_day(&mut self) -> DayState {
        match self.current_day.pred_opt() {
            Some(day) => self.load_day(day).await,
            None => DayState::Failed("day out of calendar range".to_string()),
        }
    }

    pub async fn go_to_next_day(&mut self) -> DayState {
        match self.current_day.succ_opt() {
            Some(day) => self.load_day(day).await,
            None => DayState::Failed("day out of calendar range".to_string()),
        }
    }

    // ── Selection ───────────────────────────────────────────────────────────

    /// Toggle `index` on the current day, validated against the current grid.
    pub fn toggle_selection(&mut self, index: usize) {
        self.selections.toggle(self.current_day, index, &self.slots);
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selections.is_selected(self.current_day, index)
    }

    pub fn has_any_selection(&self) -> bool {
        self.selections.has_any_selection()
    }

    /// Every selected slot across all days, flat.
    pub fn all_selected_slots(&self) -> Vec<SelectedSlot> {
        selected_slots(&self.selections)
    }

    /// Compressed ranges across all days — what the footer chips show.
    pub fn slot_ranges(&self) -> Vec<SlotRange> {
        compress_selections(&self.selections)
    }

    /// The outbound payload for the current selections.
    pub fn export(&self, timezone: Tz) -> ShareableSchedule {
        export_schedule(&self.slot_ranges(), timezone)
    }
}
