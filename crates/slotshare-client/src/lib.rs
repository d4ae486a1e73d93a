//! # slotshare-client
//!
//! Async collaborators around `slotshare-core`: the event-supplier boundary,
//! the HTTP client for the schedule-sharing backend, the day-planning session
//! that ties grid building and selection together, and invitation polling.
//!
//! The core stays pure and synchronous; everything that awaits lives here.
//!
//! ## Modules
//!
//! - [`source`] — `EventSource` trait + in-memory implementation
//! - [`client`] — `ScheduleClient` (create / fetch / select over JSON)
//! - [`planner`] — `DayPlanner` session and its `DayState` transitions
//! - [`invitations`] — fetch previously shared schedules by explicit id list
//! - [`error`] — failure categories (permission, transport, server, decode)

pub mod client;
pub mod error;
pub mod invitations;
pub mod planner;
pub mod source;

pub use client::{ScheduleClient, SelectionResponse};
pub use error::ClientError;
pub use invitations::fetch_invitations;
pub use planner::{DayPlanner, DayState};
pub use source::{EventSource, StaticEventSource};
