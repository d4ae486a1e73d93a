//! Time slots and their classified content.
//!
//! A day is divided into 48 fixed 30-minute slots. Each slot carries a
//! [`SlotContent`] variant describing what occupies it: nothing, the first
//! slot of a single event, a continuation of one, or a bundle of overlapping
//! events. Slots are immutable values — rebuilding a day replaces them.

use chrono::NaiveDateTime;

use crate::event::CalendarEvent;

/// What occupies a single slot after the overlay pass.
///
/// `Event` and `Bundled` appear only at the *first* slot of their run; every
/// following slot of the same run is a continuation variant. Continuations
/// carry no event reference — a renderer that needs one must track the run
/// start itself.
#[derive(Debug, Clone)]
pub enum SlotContent {
    /// Open for selection.
    Available,
    /// First slot of a single non-overlapping event; the span is the number
    /// of consecutive slots (>= 1) the event occupies from here.
    Event(CalendarEvent, usize),
    /// A later slot of an event whose `Event` variant appears earlier.
    EventContinuation,
    /// First slot where two or more events overlap. `count` is the number of
    /// events occupying this slot; `span` reaches to the farthest end slot
    /// among all of them.
    Bundled { count: usize, span: usize },
    /// A later slot of a bundle.
    BundledContinuation,
}

impl PartialEq for SlotContent {
    // Event variants compare by event id and span only; a rebuilt grid with
    // the same events must compare equal even if non-identifying event fields
    // (say, a refreshed calendar color) differ.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Available, Self::Available) => true,
            (Self::EventContinuation, Self::EventContinuation) => true,
            (Self::BundledContinuation, Self::BundledContinuation) => true,
            (Self::Event(e1, s1), Self::Event(e2, s2)) => e1.id == e2.id && s1 == s2,
            (
                Self::Bundled {
                    count: c1,
                    span: s1,
                },
                Self::Bundled {
                    count: c2,
                    span: s2,
                },
            ) => c1 == c2 && s1 == s2,
            _ => false,
        }
    }
}

impl Eq for SlotContent {}

/// One 30-minute interval of a day.
///
/// Invariant: `end == start + 30min`, and a full day is exactly 48 of these,
/// contiguous and non-overlapping, with slot `i` starting at
/// `day start + i * 30min`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub content: SlotContent,
}

impl TimeSlot {
    /// 12-hour display label for the slot's start time, e.g. "9:30 AM".
    pub fn time_label(&self) -> String {
        self.start.format("%-I:%M %p").to_string()
    }

    /// True if the slot is open for selection.
    pub fn is_available(&self) -> bool {
        matches!(self.content, SlotContent::Available)
    }
}
