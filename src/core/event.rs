// Event is the value callers hand to the index and receive back from queries.
//
// Purpose
// - Pair an event type label with an opaque i64 timestamp.
//
// Boundaries
// - Plain value, no input or output. The index does not store data in this
//   shape internally; queries materialize fresh copies.
//
// Notes
// - Timestamps are opaque to the core. The demo driver uses epoch
//   milliseconds, but nothing here assumes a unit or monotonic arrival.
// - Two events with equal fields are indistinguishable; duplicates are kept.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub event_type: String,
    pub timestamp: i64,
}

impl Event {
    pub fn new(event_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod event_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_an_event_from_any_string_like_type() {
        let from_str = Event::new("deploy", 125);
        let from_string = Event::new(String::from("deploy"), 125);

        assert_eq!(from_str, from_string);
        assert_eq!(from_str.event_type, "deploy");
        assert_eq!(from_str.timestamp, 125);
    }

    #[rstest]
    fn it_should_treat_equal_fields_as_the_same_event() {
        let left = Event::new("deploy", 1_700_000_000_000i64);
        let right = Event::new("deploy", 1_700_000_000_000i64);

        assert_eq!(left, right);
    }

    #[rstest]
    fn it_should_round_trip_through_json() {
        let event = Event::new("deploy", -42);

        let json = serde_json::to_string(&event).expect("expected event to serialize");
        let back: Event = serde_json::from_str(&json).expect("expected event to deserialize");

        assert_eq!(back, event);
    }
}
