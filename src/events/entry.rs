//! A single recorded event.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form event payload. Expected keys per event type are listed in
/// [`keys`](super::keys); nothing enforces them.
pub type Details = Map<String, Value>;

/// Phase in which an event happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Night,
    Day,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Night => "NIGHT",
            Phase::Day => "DAY",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of thing happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    WwTarget,
    Elimination,
    Discussion,
    Vote,
}

/// Immutable record of one event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    round: u32,
    phase: Phase,
    event_type: EventType,
    /// Wall-clock seconds since the Unix epoch.
    timestamp: f64,
    details: Details,
}

impl LogEntry {
    pub(super) fn new(round: u32, phase: Phase, event_type: EventType, details: Details) -> Self {
        let now = chrono::Utc::now();
        Self {
            round,
            phase,
            event_type,
            timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
            details,
        }
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    #[must_use]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// A string-valued detail.
    #[must_use]
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}
