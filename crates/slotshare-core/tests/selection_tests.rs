//! Tests for the per-day selection store.

use chrono::NaiveDate;
use slotshare_core::{build_slots, CalendarEvent, SelectionStore, SLOTS_PER_DAY};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

fn next_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 17).unwrap()
}

fn event(id: &str, start: &str, end: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: format!("Event {id}"),
        start_date: start.parse().unwrap(),
        end_date: end.parse().unwrap(),
        is_all_day: false,
        location: None,
        calendar_title: "Personal".to_string(),
        calendar_color: "#1A73E8".to_string(),
    }
}

// ── Toggle ──────────────────────────────────────────────────────────────────

#[test]
fn toggling_an_available_slot_selects_it() {
    let slots = build_slots(day(), &[]);
    let mut store = SelectionStore::new();

    store.toggle(day(), 18, &slots);

    assert!(store.is_selected(day(), 18));
    assert!(!store.is_selected(day(), 19));
}

#[test]
fn toggling_twice_is_self_inverse() {
    let slots = build_slots(day(), &[]);
    let mut store = SelectionStore::new();
    let before = store.clone();

    store.toggle(day(), 18, &slots);
    store.toggle(day(), 18, &slots);

    assert_eq!(store, before);
    assert!(!store.has_any_selection());
}

#[test]
fn toggling_an_occupied_slot_is_a_noop() {
    // 09:00-10:00 occupies slots 18-19: the start, the continuation, and a
    // bundled slot must all refuse selection.
    let a = event("a", "2026-03-16T09:00:00", "2026-03-16T10:00:00");
    let b = event("b", "2026-03-16T09:00:00", "2026-03-16T09:30:00");
    let slots = build_slots(day(), &[a, b]);
    let mut store = SelectionStore::new();

    store.toggle(day(), 18, &slots); // bundled
    store.toggle(day(), 19, &slots); // continuation

    assert!(!store.has_any_selection());
}

#[test]
fn out_of_range_toggle_is_a_noop() {
    let slots = build_slots(day(), &[]);
    let mut store = SelectionStore::new();

    store.toggle(day(), SLOTS_PER_DAY, &slots);
    store.toggle(day(), 1000, &slots);

    assert!(!store.has_any_selection());
}

// ── Queries ─────────────────────────────────────────────────────────────────

#[test]
fn unknown_day_is_unselected() {
    let store = SelectionStore::new();
    assert!(!store.is_selected(day(), 0));
}

#[test]
fn has_any_selection_tracks_every_day() {
    let slots = build_slots(day(), &[]);
    let other_slots = build_slots(next_day(), &[]);
    let mut store = SelectionStore::new();

    assert!(!store.has_any_selection());

    store.toggle(day(), 10, &slots);
    store.toggle(next_day(), 20, &other_slots);
    assert!(store.has_any_selection());

    store.toggle(day(), 10, &slots);
    assert!(store.has_any_selection(), "other day still has a selection");

    store.toggle(next_day(), 20, &other_slots);
    assert!(!store.has_any_selection());
}

#[test]
fn days_keep_independent_selection_sets() {
    let slots = build_slots(day(), &[]);
    let other_slots = build_slots(next_day(), &[]);
    let mut store = SelectionStore::new();

    store.toggle(day(), 18, &slots);
    store.toggle(next_day(), 18, &other_slots);
    store.toggle(day(), 18, &slots);

    assert!(!store.is_selected(day(), 18));
    assert!(store.is_selected(next_day(), 18));
}

// ── Staleness ───────────────────────────────────────────────────────────────

#[test]
fn selections_survive_a_rebuild_with_new_events() {
    // Validation happens at toggle time only: an event added after the slot
    // was selected does not retroactively deselect it.
    let empty = build_slots(day(), &[]);
    let mut store = SelectionStore::new();
    store.toggle(day(), 18, &empty);

    let rebuilt = build_slots(
        day(),
        &[event("a", "2026-03-16T09:00:00", "2026-03-16T10:00:00")],
    );

    assert!(store.is_selected(day(), 18));
    // But a fresh toggle against the rebuilt grid is refused.
    store.toggle(day(), 19, &rebuilt);
    assert!(!store.is_selected(day(), 19));
}

#[test]
fn clear_drops_every_selection() {
    let slots = build_slots(day(), &[]);
    let mut store = SelectionStore::new();
    store.toggle(day(), 1, &slots);
    store.toggle(next_day(), 2, &build_slots(next_day(), &[]));

    store.clear();

    assert!(!store.has_any_selection());
}
