//! # slotshare-core
//!
//! Day-slot builder and selection-range compressor for shareable availability.
//!
//! A day is partitioned into 48 fixed 30-minute slots. Calendar events are
//! overlaid onto the grid, classifying each slot as free, occupied by a
//! single event, or part of a bundle of overlapping events. Open slots can
//! then be selected across days, and contiguous selections compress into
//! minimal date/time ranges ready to share with a remote party.
//!
//! Everything here is pure, synchronous, in-memory computation — calendar
//! access and network submission live in `slotshare-client`.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slotshare_core::{build_slots, compress_selections, SelectionStore};
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
//! let slots = build_slots(day, &[]);
//! assert_eq!(slots.len(), 48);
//!
//! let mut store = SelectionStore::new();
//! store.toggle(day, 18, &slots); // 09:00
//! store.toggle(day, 19, &slots); // 09:30
//!
//! let ranges = compress_selections(&store);
//! assert_eq!(ranges.len(), 1);
//! assert_eq!(ranges[0].slot_count(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`event`] — calendar event input records
//! - [`slot`] — `TimeSlot` and its classified `SlotContent`
//! - [`overlay`] — event list → classified 48-slot grid
//! - [`selection`] — per-day selected-index store
//! - [`compress`] — selections → minimal contiguous ranges
//! - [`share`] — wire types and payload export

pub mod compress;
pub mod event;
pub mod overlay;
pub mod selection;
pub mod share;
pub mod slot;

pub use compress::{compress_selections, selected_slots, SelectedSlot, SlotRange};
pub use event::CalendarEvent;
pub use overlay::{build_slots, day_start, slot_bounds, SLOTS_PER_DAY, SLOT_MINUTES};
pub use selection::SelectionStore;
pub use share::{export_schedule, Schedule, ScheduleStatus, ShareableSchedule, ShareableSlot};
pub use slot::{SlotContent, TimeSlot};
