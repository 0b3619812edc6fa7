//! Booked events and the per-attendee busy index built from them.
//!
//! The index is a plain value built once per query. It does no merging or
//! sorting; coalescing is left to [`crate::merger`] so the same index can serve
//! several attendee-set lookups cheaply.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A booked event on the day's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display title; never inspected by the engine.
    #[serde(default)]
    pub title: String,
    /// Everyone the event occupies.
    pub attendees: BTreeSet<String>,
    /// When the event takes place.
    pub when: TimeRange,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, attendees: I, when: TimeRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            attendees: attendees.into_iter().map(Into::into).collect(),
            when,
        }
    }
}

/// Attendee id → that attendee's busy intervals, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarIndex {
    busy: BTreeMap<String, Vec<TimeRange>>,
}

impl CalendarIndex {
    /// Index `events` in a single pass.
    ///
    /// Each event's `when` is appended to the bucket of every attendee it names.
    pub fn build(events: &[Event]) -> Self {
        let mut busy: BTreeMap<String, Vec<TimeRange>> = BTreeMap::new();
        for event in events {
            for attendee in &event.attendees {
                busy.entry(attendee.clone()).or_default().push(event.when);
            }
        }
        Self { busy }
    }

    /// Busy intervals for one attendee. Unknown attendees are free all day and
    /// get an empty slice.
    pub fn busy_for(&self, attendee: &str) -> &[TimeRange] {
        self.busy.get(attendee).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Concatenated busy intervals of every listed attendee (unmerged).
    pub fn busy_for_all<I, S>(&self, attendees: I) -> Vec<TimeRange>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        attendees
            .into_iter()
            .flat_map(|a| self.busy_for(a.as_ref()).iter().copied())
            .collect()
    }

    /// Attendees with at least one booked event, in sorted order.
    pub fn attendees(&self) -> impl Iterator<Item = &str> {
        self.busy.keys().map(String::as_str)
    }

    /// Number of distinct attendees indexed.
    pub fn len(&self) -> usize {
        self.busy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.busy.is_empty()
    }
}

impl FromIterator<Event> for CalendarIndex {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        let events: Vec<Event> = iter.into_iter().collect();
        Self::build(&events)
    }
}
