//! Track metadata derived once at load time

use tracing::debug;

use crate::error::{Result, SessionError};
use crate::session::DriverRecords;

/// Anchors within this window count as agreement; session recordings jitter
/// lap-1 start offsets by a few tenths between cars.
const ANCHOR_NOISE_SECONDS: f64 = 0.5;

/// Fixed per-session constants derived from the loaded records.
///
/// Track length is the maximum distance observed on the first lap (in load
/// order) that has a recorded duration. The race-start anchor is each
/// participant's own lap-1 start offset; the session anchor is the first
/// loaded participant's. Both are computed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    track_length: f64,
    race_start: f64,
    anchors: Vec<(String, f64)>,
}

impl TrackMetadata {
    /// Derive metadata from the full set of loaded records.
    ///
    /// Fails with [`SessionError::InsufficientData`] when no participant has
    /// a completed lap with telemetry (track length underivable) or when no
    /// participant has started lap 1 (nothing to anchor the race clock to).
    pub(crate) fn derive(drivers: &[DriverRecords]) -> Result<Self> {
        let track_length = derive_track_length(drivers)?;

        let anchors: Vec<(String, f64)> = drivers
            .iter()
            .filter_map(|driver| {
                let lap_one = driver.laps.iter().find(|lap| lap.record.lap_number == 1)?;
                Some((driver.participant.id.clone(), lap_one.record.start))
            })
            .collect();

        let race_start = anchors
            .first()
            .map(|(_, start)| *start)
            .ok_or_else(|| SessionError::insufficient_data("no participant has a lap-1 record"))?;

        let metadata = Self { track_length, race_start, anchors };

        let spread = drivers
            .iter()
            .filter_map(|driver| metadata.anchor(&driver.participant.id))
            .map(|start| (start - race_start).abs())
            .fold(0.0, f64::max);
        if spread > ANCHOR_NOISE_SECONDS {
            debug!(spread, race_start, "race-start anchors disagree beyond expected noise");
        }

        Ok(metadata)
    }

    /// Track length in meters; a single positive scalar, fixed for the
    /// session.
    pub fn track_length(&self) -> f64 {
        self.track_length
    }

    /// Session anchor: lap-1 start offset of the first loaded participant
    pub fn race_start(&self) -> f64 {
        self.race_start
    }

    /// A participant's own lap-1 start offset, if they started lap 1
    pub fn anchor(&self, participant_id: &str) -> Option<f64> {
        self.anchors.iter().find(|(id, _)| id == participant_id).map(|(_, start)| *start)
    }
}

fn derive_track_length(drivers: &[DriverRecords]) -> Result<f64> {
    for driver in drivers {
        for lap in &driver.laps {
            if lap.record.duration.is_none() {
                continue;
            }

            // A completed lap without samples cannot measure the track; keep
            // looking instead of failing the whole session.
            let max_distance =
                lap.telemetry.iter().map(|s| s.distance).fold(f64::NEG_INFINITY, f64::max);
            if max_distance.is_finite() && max_distance > 0.0 {
                return Ok(max_distance);
            }
        }
    }

    Err(SessionError::insufficient_data(
        "no participant has a completed lap with telemetry; track length cannot be derived",
    ))
}
