//! Per-day selection of open slots.
//!
//! Selections are keyed by calendar day (`NaiveDate` — the canonical day key,
//! normalized once at the boundary rather than relying on instant equality)
//! and hold the set of selected slot indices for that day. Validation happens
//! only at toggle time: a slot must be available in the day's *current* grid
//! to be toggled, but selections already made are not revisited if the day is
//! later rebuilt with different events.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::overlay::SLOTS_PER_DAY;
use crate::slot::TimeSlot;

/// Mapping from day to the set of selected slot indices on that day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: BTreeMap<NaiveDate, BTreeSet<usize>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index` in `day`'s selection set.
    ///
    /// Silently a no-op when `index` is out of range or the slot at `index`
    /// in `slots` (the day's current grid) is not available. Toggling the
    /// same available index twice restores the prior state.
    pub fn toggle(&mut self, day: NaiveDate, index: usize, slots: &[TimeSlot]) {
        if index >= SLOTS_PER_DAY || index >= slots.len() {
            return;
        }
        if !slots[index].is_available() {
            return;
        }

        let selections = self.selected.entry(day).or_default();
        if !selections.remove(&index) {
            selections.insert(index);
        }
    }

    /// Whether `index` is selected on `day`. Unknown days are unselected.
    pub fn is_selected(&self, day: NaiveDate, index: usize) -> bool {
        self.selected
            .get(&day)
            .is_some_and(|indices| indices.contains(&index))
    }

    /// True iff any day has at least one selected slot.
    pub fn has_any_selection(&self) -> bool {
        self.selected.values().any(|indices| !indices.is_empty())
    }

    /// Days and their selected indices, ascending by day then by index.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &BTreeSet<usize>)> {
        self.selected.iter().map(|(day, indices)| (*day, indices))
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
