//! Property-based tests for the merge → invert → plan pipeline using proptest.
//!
//! These verify invariants that should hold for *any* calendar, not just the
//! hand-picked scenarios in `planner_tests.rs`.

use meeting_engine::{
    common_slots, free_slots, invert, merge, plan, query, CalendarIndex, Event, MeetingRequest,
    TimeRange, END_OF_DAY,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const PEOPLE: [&str; 4] = ["alice", "bob", "carol", "dave"];

/// A range lying inside the day (possibly empty).
fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0u32..END_OF_DAY).prop_flat_map(|start| {
        (Just(start), 0u32..=(END_OF_DAY - start).min(240))
            .prop_map(|(start, duration)| TimeRange::from_start_duration(start, duration))
    })
}

fn arb_attendees() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(PEOPLE.to_vec(), 0..=PEOPLE.len())
        .prop_map(|names| names.into_iter().map(String::from).collect())
}

fn arb_event() -> impl Strategy<Value = Event> {
    (arb_attendees(), arb_range()).prop_map(|(attendees, when)| Event::new("", attendees, when))
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..12)
}

fn arb_duration() -> impl Strategy<Value = i64> {
    -10i64..=180
}

fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (arb_attendees(), arb_attendees(), arb_duration()).prop_map(|(mandatory, optional, duration)| {
        MeetingRequest::new(mandatory, duration).with_optional(optional)
    })
}

fn is_sorted_unique(slots: &[TimeRange]) -> bool {
    slots.windows(2).all(|w| w[0] < w[1])
}

// ---------------------------------------------------------------------------
// Merge / invert
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn merge_is_sorted_and_separated(ranges in prop::collection::vec(arb_range(), 0..20)) {
        let merged = merge(&ranges);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start(), "{} then {}", pair[0], pair[1]);
        }
        for r in ranges.iter().filter(|r| !r.is_empty()) {
            prop_assert!(merged.iter().any(|m| m.contains(r)), "{} not covered", r);
        }
    }

    #[test]
    fn free_and_busy_partition_the_day(ranges in prop::collection::vec(arb_range(), 0..20)) {
        let busy = merge(&ranges);
        let free = invert(&busy);

        let mut all: Vec<TimeRange> = busy.iter().chain(free.iter()).copied().collect();
        all.sort();
        prop_assert_eq!(all.first().map(TimeRange::start), Some(0));
        prop_assert_eq!(all.last().map(TimeRange::end), Some(END_OF_DAY));
        for pair in all.windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }
        prop_assert!(free.iter().all(|r| !r.is_empty()));
    }
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn slots_are_sorted_unique_and_long_enough(events in arb_events(), request in arb_request()) {
        let slots = query(&events, &request);
        prop_assert!(is_sorted_unique(&slots));
        for slot in &slots {
            prop_assert!(slot.has_enough_time(request.duration), "{} too short", slot);
        }
    }

    #[test]
    fn query_is_idempotent(events in arb_events(), request in arb_request()) {
        prop_assert_eq!(query(&events, &request), query(&events, &request));
    }

    #[test]
    fn slots_never_clash_with_mandatory_events(events in arb_events(), request in arb_request()) {
        let slots = query(&events, &request);
        for event in events.iter().filter(|e| !e.when.is_empty()) {
            if event.attendees.is_disjoint(&request.attendees) {
                continue;
            }
            for slot in &slots {
                prop_assert!(!slot.overlaps(&event.when), "{} clashes with {}", slot, event.when);
            }
        }
    }

    #[test]
    fn adding_a_mandatory_attendee_never_grows_availability(
        events in arb_events(),
        mandatory in arb_attendees(),
        extra in prop::sample::select(PEOPLE.to_vec()),
        duration in arb_duration(),
    ) {
        let before = query(&events, &MeetingRequest::new(mandatory.clone(), duration));
        let mut widened = mandatory;
        widened.push(extra.to_string());
        let after = query(&events, &MeetingRequest::new(widened, duration));

        for slot in &after {
            prop_assert!(before.iter().any(|b| b.contains(slot)), "{} appeared", slot);
        }
    }

    #[test]
    fn falls_back_to_mandatory_when_nothing_is_shared(
        events in arb_events(),
        mandatory in arb_attendees(),
        optional in arb_attendees(),
        duration in arb_duration(),
    ) {
        prop_assume!(!mandatory.is_empty() && !optional.is_empty());

        let index = CalendarIndex::build(&events);
        let mandatory_only = query(&events, &MeetingRequest::new(mandatory.clone(), duration));
        let optional_free = free_slots(&index, &optional);
        let shared = common_slots(&mandatory_only, &optional_free, duration);

        let request = MeetingRequest::new(mandatory, duration).with_optional(optional);
        let result = plan(&events, &request);
        if shared.is_empty() {
            prop_assert_eq!(&result.slots, &mandatory_only);
            prop_assert!(!result.optional_accommodated);
        } else {
            prop_assert_eq!(&result.slots, &shared);
            prop_assert!(result.optional_accommodated);
        }
    }
}
