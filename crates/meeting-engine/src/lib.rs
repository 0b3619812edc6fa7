//! # meeting-engine
//!
//! Deterministic interval algebra for finding meeting slots within a single day.
//!
//! Given the day's booked events and a meeting request (mandatory attendees,
//! optional attendees, duration), the engine derives every window in which the
//! meeting fits. Optional attendees are honored on a best-effort basis: when no
//! window suits everyone, the mandatory-only windows are returned instead.
//!
//! All times are minutes since midnight on a half-open `[0, 1440)` day.
//!
//! ## Modules
//!
//! - [`time_range`] — Immutable half-open interval value type
//! - [`calendar`] — Events and the attendee → busy-interval index
//! - [`merger`] — Coalesce overlapping or touching intervals
//! - [`freebusy`] — Invert busy intervals into free slots
//! - [`planner`] — Meeting requests and the mandatory/optional policy
//! - [`error`] — Error types
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     ["alice"],
//!     TimeRange::from_start_end(540, 600, false).unwrap(),
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = query(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeRange::from_start_duration(0, 540),
//!         TimeRange::from_start_duration(600, 840),
//!     ]
//! );
//! ```

pub mod calendar;
pub mod error;
pub mod freebusy;
pub mod merger;
pub mod planner;
pub mod time_range;

pub use calendar::{CalendarIndex, Event};
pub use error::ScheduleError;
pub use freebusy::invert;
pub use merger::merge;
pub use planner::{common_slots, free_slots, plan, query, MeetingPlan, MeetingRequest};
pub use time_range::{clock_minutes, long_enough, TimeRange, END_OF_DAY, START_OF_DAY};
