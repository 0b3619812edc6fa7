//! WASM bindings for meeting-engine.
//!
//! Exposes meeting slot search and free/busy computation to JavaScript via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```
//!
//! Events are `{title?, attendees, when: {start, duration}}` objects and
//! requests are `{attendees, optional_attendees?, duration}`, with all times in
//! minutes since midnight.

use meeting_engine::{CalendarIndex, Event, MeetingRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON helpers (plain `String` errors so they can be exercised off-wasm)
// ---------------------------------------------------------------------------

fn parse_json<T: DeserializeOwned>(what: &str, json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn meeting_slots_json(events_json: &str, request_json: &str) -> Result<String, String> {
    let events: Vec<Event> = parse_json("events", events_json)?;
    let request: MeetingRequest = parse_json("request", request_json)?;
    to_json(&meeting_engine::query(&events, &request))
}

fn plan_json(events_json: &str, request_json: &str) -> Result<String, String> {
    let events: Vec<Event> = parse_json("events", events_json)?;
    let request: MeetingRequest = parse_json("request", request_json)?;
    to_json(&meeting_engine::plan(&events, &request))
}

fn free_slots_json(events_json: &str, attendees_json: &str) -> Result<String, String> {
    let events: Vec<Event> = parse_json("events", events_json)?;
    let attendees: Vec<String> = parse_json("attendees", attendees_json)?;
    let index = CalendarIndex::build(&events);
    to_json(&meeting_engine::free_slots(&index, &attendees))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every slot in which the requested meeting fits.
///
/// `events_json` is a JSON array of events and `request_json` a meeting
/// request. Returns a JSON array of `{start, duration}` objects sorted by start.
#[wasm_bindgen(js_name = "findMeetingSlots")]
pub fn find_meeting_slots(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    meeting_slots_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))
}

/// Like `findMeetingSlots`, but returns `{slots, optional_accommodated}` so the
/// caller can tell whether optional attendees were dropped.
#[wasm_bindgen(js_name = "planMeeting")]
pub fn plan_meeting(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    plan_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))
}

/// Free slots of the day shared by every attendee in `attendees_json` (a JSON
/// array of ids), without any length filter.
#[wasm_bindgen(js_name = "freeSlots")]
pub fn free_slots(events_json: &str, attendees_json: &str) -> Result<String, JsValue> {
    free_slots_json(events_json, attendees_json).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: &str = r#"[
        {"title": "Standup", "attendees": ["A"], "when": {"start": 540, "duration": 60}},
        {"attendees": ["B"], "when": {"start": 1000, "duration": 30}}
    ]"#;

    #[test]
    fn meeting_slots_with_optional_attendee() {
        let request = r#"{"attendees": ["A"], "optional_attendees": ["B"], "duration": 30}"#;
        let json = meeting_slots_json(EVENTS, request).unwrap();
        assert_eq!(
            json,
            r#"[{"start":0,"duration":540},{"start":600,"duration":400},{"start":1030,"duration":410}]"#
        );
    }

    #[test]
    fn plan_reports_accommodation() {
        let request = r#"{"attendees": ["A"], "optional_attendees": ["B"], "duration": 30}"#;
        let json = plan_json(EVENTS, request).unwrap();
        assert!(json.ends_with(r#""optional_accommodated":true}"#));
    }

    #[test]
    fn free_slots_for_attendee_list() {
        let json = free_slots_json(EVENTS, r#"["A", "B"]"#).unwrap();
        assert_eq!(
            json,
            r#"[{"start":0,"duration":540},{"start":600,"duration":400},{"start":1030,"duration":410}]"#
        );
    }

    #[test]
    fn invalid_events_json_is_reported() {
        let err = meeting_slots_json("{", r#"{"attendees": [], "duration": 30}"#).unwrap_err();
        assert!(err.starts_with("Invalid events JSON"));
    }

    #[test]
    fn invalid_request_json_is_reported() {
        let err = plan_json("[]", r#"{"duration": "long"}"#).unwrap_err();
        assert!(err.starts_with("Invalid request JSON"));
    }
}
