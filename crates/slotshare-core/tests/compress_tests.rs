//! Tests for selection-range compression and the flat slot projection.

use chrono::NaiveDate;
use slotshare_core::{
    build_slots, compress_selections, selected_slots, SelectionStore,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

fn next_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 17).unwrap()
}

/// Store with the given indices selected on `date` (grid built with no events).
fn store_with(date: NaiveDate, indices: &[usize]) -> SelectionStore {
    let slots = build_slots(date, &[]);
    let mut store = SelectionStore::new();
    for &index in indices {
        store.toggle(date, index, &slots);
    }
    store
}

// ── Range compression ───────────────────────────────────────────────────────

#[test]
fn adjacent_runs_compress_into_minimal_ranges() {
    // {2,3,4,7,8} → [2,4] and [7,8], in that order.
    let store = store_with(day(), &[2, 3, 4, 7, 8]);

    let ranges = compress_selections(&store);

    assert_eq!(ranges.len(), 2);
    assert_eq!((ranges[0].start_index, ranges[0].end_index), (2, 4));
    assert_eq!((ranges[1].start_index, ranges[1].end_index), (7, 8));
    assert_eq!(ranges[0].slot_count(), 3);
    assert_eq!(ranges[1].slot_count(), 2);
}

#[test]
fn singleton_selection_is_a_one_slot_range() {
    let store = store_with(day(), &[5]);

    let ranges = compress_selections(&store);

    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].start_index, ranges[0].end_index), (5, 5));
    assert_eq!(ranges[0].start, day().and_hms_opt(2, 30, 0).unwrap());
    assert_eq!(ranges[0].end, day().and_hms_opt(3, 0, 0).unwrap());
}

#[test]
fn ranges_project_to_wall_clock_times() {
    // Slots 18-19 are 09:00-10:00.
    let store = store_with(day(), &[18, 19]);

    let ranges = compress_selections(&store);

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, day().and_hms_opt(9, 0, 0).unwrap());
    assert_eq!(ranges[0].end, day().and_hms_opt(10, 0, 0).unwrap());
}

#[test]
fn a_single_gap_splits_the_run() {
    let store = store_with(day(), &[10, 12]);

    let ranges = compress_selections(&store);

    assert_eq!(ranges.len(), 2);
    assert_eq!((ranges[0].start_index, ranges[0].end_index), (10, 10));
    assert_eq!((ranges[1].start_index, ranges[1].end_index), (12, 12));
}

#[test]
fn days_are_emitted_in_ascending_order() {
    let mut store = store_with(next_day(), &[4, 5]);
    let slots = build_slots(day(), &[]);
    store.toggle(day(), 40, &slots);

    let ranges = compress_selections(&store);

    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0].date, day());
    assert_eq!((ranges[0].start_index, ranges[0].end_index), (40, 40));
    assert_eq!(ranges[1].date, next_day());
    assert_eq!((ranges[1].start_index, ranges[1].end_index), (4, 5));
}

#[test]
fn empty_store_compresses_to_nothing() {
    let store = SelectionStore::new();
    assert!(compress_selections(&store).is_empty());
}

#[test]
fn last_slot_of_the_day_is_representable() {
    let store = store_with(day(), &[47]);

    let ranges = compress_selections(&store);

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, day().and_hms_opt(23, 30, 0).unwrap());
    assert_eq!(ranges[0].end, next_day().and_hms_opt(0, 0, 0).unwrap());
}

// ── Flat projection ─────────────────────────────────────────────────────────

#[test]
fn selected_slots_lists_every_slot_in_order() {
    let mut store = store_with(next_day(), &[3]);
    let slots = build_slots(day(), &[]);
    store.toggle(day(), 19, &slots);
    store.toggle(day(), 18, &slots);

    let flat = selected_slots(&store);

    assert_eq!(flat.len(), 3);
    assert_eq!((flat[0].date, flat[0].slot_index), (day(), 18));
    assert_eq!((flat[1].date, flat[1].slot_index), (day(), 19));
    assert_eq!((flat[2].date, flat[2].slot_index), (next_day(), 3));
    assert_eq!(flat[0].start, day().and_hms_opt(9, 0, 0).unwrap());
    assert_eq!(flat[0].end, day().and_hms_opt(9, 30, 0).unwrap());
}
