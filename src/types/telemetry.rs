use serde::{Deserialize, Serialize};

/// One sample from the distance-interpolated telemetry stream.
///
/// This is the stream the ranking runs on: `distance` is meters covered
/// within the governing lap, and `(x, y)` is the interpolated world position
/// used for track-map snapshots. Channels beyond `time` default to zero so a
/// recording may carry position-only samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Session time of the sample
    pub time: f64,

    /// Distance covered within the lap, in meters
    #[serde(default)]
    pub distance: f64,

    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,

    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub rpm: f64,
    #[serde(default)]
    pub gear: i8,
    #[serde(default)]
    pub throttle: f64,
    #[serde(default)]
    pub brake: bool,
    /// Raw DRS code; see [`decode_drs`]
    #[serde(default)]
    pub drs: u8,
}

impl Default for TelemetrySample {
    fn default() -> Self {
        Self {
            time: 0.0,
            distance: 0.0,
            x: 0.0,
            y: 0.0,
            speed: 0.0,
            rpm: 0.0,
            gear: 0,
            throttle: 0.0,
            brake: false,
            drs: 0,
        }
    }
}

/// One sample from the raw per-lap channel stream.
///
/// Unlike [`TelemetrySample`] this stream is not interpolated and carries no
/// distance; it feeds the instantaneous telemetry snapshot only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSample {
    /// Session time of the sample
    pub time: f64,

    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub rpm: f64,
    #[serde(default)]
    pub gear: i8,
    #[serde(default)]
    pub throttle: f64,
    #[serde(default)]
    pub brake: bool,
    /// Raw DRS code; see [`decode_drs`]
    #[serde(default)]
    pub drs: u8,
}

/// Decoded DRS wing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrsState {
    /// Wing closed, not available
    Off,
    /// Activation permitted but wing still closed
    Eligible,
    /// Wing open
    Active,
    /// Unrecognized raw code
    Unknown(u8),
}

impl DrsState {
    /// Whether the wing is actually open
    pub fn is_active(self) -> bool {
        self == DrsState::Active
    }
}

/// Decode a raw DRS channel code.
///
/// Only the open-wing codes count as active; eligibility without activation
/// does not.
pub fn decode_drs(code: u8) -> DrsState {
    match code {
        0 | 1 => DrsState::Off,
        8 => DrsState::Eligible,
        10 | 12 | 14 => DrsState::Active,
        other => DrsState::Unknown(other),
    }
}
