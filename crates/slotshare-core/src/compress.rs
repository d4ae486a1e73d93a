//! Compress sparse per-day selections into contiguous ranges.
//!
//! Each day's selected indices are already sorted; a single scan extends the
//! current window while the next index is adjacent and emits a range at every
//! gap. Emitted ranges are ordered by day, then by start index, and project
//! back to wall-clock times for display chips and the outbound payload.

use chrono::{NaiveDate, NaiveDateTime};

use crate::overlay::slot_bounds;
use crate::selection::SelectionStore;

/// A single selected slot projected to wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSlot {
    pub date: NaiveDate,
    pub slot_index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A maximal run of adjacent selected slots on one day.
///
/// `start_index..=end_index` are all selected; the slots immediately before
/// and after the run are not. `start`/`end` are the run's wall-clock bounds
/// (`end` is the end of the *last* slot). This is the record the footer chips
/// render and the exporter serializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRange {
    pub date: NaiveDate,
    pub start_index: usize,
    pub end_index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SlotRange {
    /// Number of slots in the range.
    pub fn slot_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Every selected slot, flat, ordered by day then index.
pub fn selected_slots(store: &SelectionStore) -> Vec<SelectedSlot> {
    let mut result = Vec::new();
    for (date, indices) in store.iter() {
        for &slot_index in indices {
            let (start, end) = slot_bounds(date, slot_index);
            result.push(SelectedSlot {
                date,
                slot_index,
                start,
                end,
            });
        }
    }
    result
}

/// Merge each day's selected indices into minimal contiguous ranges.
pub fn compress_selections(store: &SelectionStore) -> Vec<SlotRange> {
    let mut ranges = Vec::new();

    for (date, indices) in store.iter() {
        let mut run: Option<(usize, usize)> = None;

        for &index in indices {
            match run {
                Some((start, end)) if index == end + 1 => {
                    run = Some((start, index));
                }
                Some((start, end)) => {
                    ranges.push(make_range(date, start, end));
                    run = Some((index, index));
                }
                None => {
                    run = Some((index, index));
                }
            }
        }

        if let Some((start, end)) = run {
            ranges.push(make_range(date, start, end));
        }
    }

    ranges
}

fn make_range(date: NaiveDate, start_index: usize, end_index: usize) -> SlotRange {
    let (start, _) = slot_bounds(date, start_index);
    let (_, end) = slot_bounds(date, end_index);
    SlotRange {
        date,
        start_index,
        end_index,
        start,
        end,
    }
}
