use std::fmt;

use serde::{Deserialize, Serialize};

/// One raw track status event from the session timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackStatusEvent {
    /// Session time at which the status took effect
    pub time: f64,

    /// Raw status code as recorded
    pub code: String,
}

/// Decoded track status, with its fixed display vocabulary.
///
/// Unmapped codes are carried in [`TrackStatus::Unknown`] rather than
/// rejected; `Unknown(None)` means the query instant precedes the first
/// event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackStatus {
    Green,
    Yellow,
    SafetyCar,
    Red,
    Vsc,
    VscEnding,
    Unknown(Option<String>),
}

impl TrackStatus {
    /// Decode a raw status code
    pub fn from_code(code: &str) -> Self {
        match code {
            "1" => TrackStatus::Green,
            "2" => TrackStatus::Yellow,
            "4" => TrackStatus::SafetyCar,
            "5" => TrackStatus::Red,
            "6" => TrackStatus::Vsc,
            "7" => TrackStatus::VscEnding,
            other => TrackStatus::Unknown(Some(other.to_string())),
        }
    }

    /// Status in effect at `session_time`: the last event at or before it.
    ///
    /// Events are time-ordered (validated at load), so this is a binary
    /// search.
    pub fn resolve(events: &[TrackStatusEvent], session_time: f64) -> Self {
        let idx = events.partition_point(|event| event.time <= session_time);
        match idx.checked_sub(1).and_then(|i| events.get(i)) {
            Some(event) => Self::from_code(&event.code),
            None => TrackStatus::Unknown(None),
        }
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackStatus::Green => write!(f, "Green"),
            TrackStatus::Yellow => write!(f, "Yellow"),
            TrackStatus::SafetyCar => write!(f, "SC"),
            TrackStatus::Red => write!(f, "Red"),
            TrackStatus::Vsc => write!(f, "VSC"),
            TrackStatus::VscEnding => write!(f, "VSC Ending"),
            TrackStatus::Unknown(Some(code)) => write!(f, "Unknown ({code})"),
            TrackStatus::Unknown(None) => write!(f, "Unknown"),
        }
    }
}
