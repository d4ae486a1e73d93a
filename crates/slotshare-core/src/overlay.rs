//! Build a day's slot grid from a list of calendar events.
//!
//! Clips each event to the day, maps it to the slot indices it occupies
//! (floor at the start, ceil at the end — occupancy is slot-aligned, never
//! partial), groups events per slot in input order, then classifies all 48
//! slots in a single left-to-right pass. Overlapping events collapse into
//! bundles whose span reaches to the farthest co-occupant.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashSet;

use crate::event::CalendarEvent;
use crate::slot::{SlotContent, TimeSlot};

/// Number of slots in a day.
pub const SLOTS_PER_DAY: usize = 48;

/// Slot width in minutes.
pub const SLOT_MINUTES: i64 = 30;

const SLOT_SECONDS: i64 = SLOT_MINUTES * 60;

/// Midnight at the start of the given day.
pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Wall-clock bounds of slot `index` on the given day.
pub fn slot_bounds(day: NaiveDate, index: usize) -> (NaiveDateTime, NaiveDateTime) {
    let start = day_start(day) + Duration::minutes(index as i64 * SLOT_MINUTES);
    (start, start + Duration::minutes(SLOT_MINUTES))
}

/// Build the 48-slot grid for `day`, classifying each slot against `events`.
///
/// Total over any input: an empty list yields an all-available grid, and
/// events entirely outside the day (or with inverted bounds) are ignored.
/// The pass is forward-only and never revisits a classified slot: an event
/// that begins overlapping an already-started event at a later slot starts a
/// fresh bundle there — the earlier slots keep their original classification.
pub fn build_slots(day: NaiveDate, events: &[CalendarEvent]) -> Vec<TimeSlot> {
    let start_of_day = day_start(day);
    let mut slots = empty_slots(day);

    // Group events by the slots they occupy, preserving input order.
    let mut occupancy: Vec<Vec<usize>> = vec![Vec::new(); SLOTS_PER_DAY];
    for (event_index, event) in events.iter().enumerate() {
        if let Some(range) = occupied_range(event, start_of_day) {
            for slot_index in range {
                occupancy[slot_index].push(event_index);
            }
        }
    }

    let mut started: HashSet<&str> = HashSet::new();

    for slot_index in 0..SLOTS_PER_DAY {
        let occupants = &occupancy[slot_index];
        if occupants.is_empty() {
            continue; // slot stays available
        }

        let content = if occupants.len() == 1 {
            let event = &events[occupants[0]];
            if started.contains(event.id.as_str()) {
                SlotContent::EventContinuation
            } else {
                started.insert(event.id.as_str());
                let span = event_span(event, slot_index, start_of_day);
                SlotContent::Event(event.clone(), span)
            }
        } else {
            let any_unstarted = occupants
                .iter()
                .any(|&i| !started.contains(events[i].id.as_str()));
            if any_unstarted {
                for &i in occupants {
                    started.insert(events[i].id.as_str());
                }
                let span = bundled_span(occupants, events, slot_index, start_of_day);
                SlotContent::Bundled {
                    count: occupants.len(),
                    span,
                }
            } else {
                SlotContent::BundledContinuation
            }
        };

        slots[slot_index].content = content;
    }

    slots
}

/// Fresh all-available grid covering the full day.
fn empty_slots(day: NaiveDate) -> Vec<TimeSlot> {
    (0..SLOTS_PER_DAY)
        .map(|index| {
            let (start, end) = slot_bounds(day, index);
            TimeSlot {
                start,
                end,
                content: SlotContent::Available,
            }
        })
        .collect()
}

/// Slot indices occupied by `event` on the day starting at `start_of_day`,
/// or `None` when the event does not touch the day.
///
/// The event is clipped to `[start_of_day, start_of_day + 24h)`; a clipped
/// interval that is empty (outside the day, or inverted bounds) occupies
/// nothing. Start index floors, end index ceils: a sub-slot remainder still
/// claims the whole slot.
fn occupied_range(
    event: &CalendarEvent,
    start_of_day: NaiveDateTime,
) -> Option<std::ops::Range<usize>> {
    let end_of_day = start_of_day + Duration::hours(24);

    let effective_start = event.start_date.max(start_of_day);
    let effective_end = event.end_date.min(end_of_day);

    if effective_start >= effective_end {
        return None;
    }

    let start_secs = (effective_start - start_of_day).num_seconds();
    let end_secs = (effective_end - start_of_day).num_seconds();

    let start_slot = (start_secs / SLOT_SECONDS) as usize;
    let end_slot = (((end_secs + SLOT_SECONDS - 1) / SLOT_SECONDS) as usize).min(SLOTS_PER_DAY);

    Some(start_slot..end_slot)
}

/// Consecutive slots `event` occupies starting at `slot_index`.
fn event_span(event: &CalendarEvent, slot_index: usize, start_of_day: NaiveDateTime) -> usize {
    match occupied_range(event, start_of_day) {
        Some(range) if range.start == slot_index => range.len(),
        _ => 1,
    }
}

/// Span of a bundle starting at `slot_index`: the farthest-reaching end slot
/// among all occupying events, not merely this slot's own occupancy.
fn bundled_span(
    occupants: &[usize],
    events: &[CalendarEvent],
    slot_index: usize,
    start_of_day: NaiveDateTime,
) -> usize {
    let mut max_end_slot = slot_index + 1;
    for &event_index in occupants {
        if let Some(range) = occupied_range(&events[event_index], start_of_day) {
            max_end_slot = max_end_slot.max(range.end);
        }
    }
    max_end_slot - slot_index
}
