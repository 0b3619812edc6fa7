//! Meeting requests and the mandatory/optional availability policy.
//!
//! Mandatory attendees must all be free. Optional attendees are accommodated
//! when some window of the requested length suits everyone; otherwise the
//! mandatory-only windows are returned and the optional attendees are dropped.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calendar::{CalendarIndex, Event};
use crate::freebusy;
use crate::merger;
use crate::time_range::{long_enough, TimeRange};

/// A request to schedule a meeting of `duration` minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Mandatory attendees: every returned slot suits all of them.
    pub attendees: BTreeSet<String>,
    /// Optional attendees, honored when possible.
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
    /// Required length in minutes. Zero or negative accepts any free slot.
    pub duration: i64,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    /// Replace the optional attendee set.
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of planning a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPlan {
    /// Candidate slots, sorted by start with no duplicates.
    pub slots: Vec<TimeRange>,
    /// True when the slots also suit the optional attendees. False when the
    /// request named none, or when they could not be fitted and the
    /// mandatory-only slots were returned instead.
    pub optional_accommodated: bool,
}

/// Find every slot in which the requested meeting fits.
///
/// Shorthand for [`plan`] when the caller only needs the slots.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    plan(events, request).slots
}

/// Plan a meeting against the day's `events`.
///
/// The result is deterministic for the same inputs. With no attendees at all
/// the whole day is offered, whatever the events and requested duration.
pub fn plan(events: &[Event], request: &MeetingRequest) -> MeetingPlan {
    let mandatory = &request.attendees;
    let optional = &request.optional_attendees;

    if mandatory.is_empty() && optional.is_empty() {
        debug!(duration = request.duration, "no attendees, offering the whole day");
        return MeetingPlan {
            slots: vec![TimeRange::WHOLE_DAY],
            optional_accommodated: false,
        };
    }

    let index = CalendarIndex::build(events);
    debug!(
        events = events.len(),
        indexed_attendees = index.len(),
        mandatory = mandatory.len(),
        optional = optional.len(),
        duration = request.duration,
        "planning meeting"
    );

    let (slots, optional_accommodated) = if optional.is_empty() {
        (long_enough(&free_slots(&index, mandatory), request.duration), false)
    } else if mandatory.is_empty() {
        (long_enough(&free_slots(&index, optional), request.duration), true)
    } else {
        let mandatory_free = long_enough(&free_slots(&index, mandatory), request.duration);
        let optional_free = free_slots(&index, optional);
        let shared = common_slots(&mandatory_free, &optional_free, request.duration);
        if shared.is_empty() {
            debug!("no slot suits the optional attendees, falling back to mandatory only");
            (mandatory_free, false)
        } else {
            (shared, true)
        }
    };

    MeetingPlan {
        slots: sorted_unique(slots),
        optional_accommodated,
    }
}

/// Free slots shared by every attendee in `attendees`, unfiltered by length.
///
/// Attendees missing from the index contribute no busy time.
pub fn free_slots<I, S>(index: &CalendarIndex, attendees: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let busy = merger::merge(&index.busy_for_all(attendees));
    trace!(busy = busy.len(), "merged busy intervals");
    freebusy::invert(&busy)
}

/// Overlap regions between two sorted, disjoint slot lists that last at least
/// `duration` minutes.
///
/// Walks both lists once, advancing whichever slot ends first.
pub fn common_slots(left: &[TimeRange], right: &[TimeRange], duration: i64) -> Vec<TimeRange> {
    let mut shared = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        let (l, r) = (left[i], right[j]);
        if let Some(region) = l.intersect(&r) {
            if region.has_enough_time(duration) {
                shared.push(region);
            }
        }
        if l.end() <= r.end() {
            i += 1;
        } else {
            j += 1;
        }
    }

    shared
}

fn sorted_unique(mut slots: Vec<TimeRange>) -> Vec<TimeRange> {
    slots.sort_by(TimeRange::order_by_start);
    slots.dedup();
    slots
}
