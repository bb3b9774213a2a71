//! Instantaneous telemetry and position snapshots

use serde::Serialize;

use crate::resolver;
use crate::session::DriverRecords;
use crate::types::{Participant, decode_drs};

/// Instantaneous car channel values for one participant.
///
/// Sampled from the raw per-lap channel stream, not the
/// distance-interpolated stream used for ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub speed: f64,
    pub rpm: f64,
    pub gear: i8,
    /// Throttle application in percent
    pub throttle: f64,
    pub brake: bool,
    /// Decoded from the raw DRS code; only open-wing codes count as active
    pub drs_active: bool,
}

/// Instantaneous world position for one participant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSnapshot {
    pub participant: Participant,
    pub x: f64,
    pub y: f64,
}

/// Resolve one participant's car channels at `session_time`.
///
/// `None` when the participant has no governing lap or the raw channel
/// stream has no sample at or before the instant.
pub(crate) fn telemetry_snapshot(
    driver: &DriverRecords,
    session_time: f64,
) -> Option<TelemetrySnapshot> {
    let (lap, _) = resolver::governing_lap(&driver.laps, session_time)?;
    let sample = resolver::latest_at(&lap.car_data, session_time, |s| s.time)?;

    Some(TelemetrySnapshot {
        speed: sample.speed,
        rpm: sample.rpm,
        gear: sample.gear,
        throttle: sample.throttle,
        brake: sample.brake,
        drs_active: decode_drs(sample.drs).is_active(),
    })
}

/// Resolve (x, y) positions for every participant with resolvable state.
///
/// Participants without a governing lap or without an interpolated sample at
/// or before the instant are omitted, in keeping with the rest of the
/// engine's no-state-is-not-an-error policy.
pub(crate) fn position_snapshots(
    drivers: &[DriverRecords],
    session_time: f64,
) -> Vec<PositionSnapshot> {
    drivers
        .iter()
        .filter_map(|driver| {
            let (lap, _) = resolver::governing_lap(&driver.laps, session_time)?;
            let sample = resolver::latest_at(&lap.telemetry, session_time, |s| s.time)?;
            Some(PositionSnapshot {
                participant: driver.participant.clone(),
                x: sample.x,
                y: sample.y,
            })
        })
        .collect()
}
