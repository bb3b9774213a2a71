//! Driver state resolution at a point in session time.
//!
//! This is the heart of the reconstruction: given one participant's ordered
//! lap and telemetry records and a session time, decide which lap governs
//! that instant, find the latest sample at or before it, and turn the pair
//! into a ranked-comparable [`DriverState`]. Every outcome that is not a
//! full state (not started yet, telemetry lagging at a lap boundary) is
//! `None`, never an error.

use tracing::warn;

use crate::session::{DriverRecords, LapData};
use crate::track::TrackMetadata;
use crate::types::{LapRecord, Participant, TelemetrySample, TireCompound};

/// One participant's reconstructed race state at a query instant.
///
/// Ephemeral: recomputed on every query, borrowing from the loaded records.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverState<'a> {
    pub participant: &'a Participant,

    /// Lap the participant is judged to be on (or to have just completed)
    pub lap_number: u32,

    /// Distance within the governing lap, in meters
    pub distance: f64,

    /// Ranking key: `(lap_number - 1) * track_length + distance`
    pub total_distance: f64,

    /// Approximate elapsed race duration in seconds; used only to derive the
    /// leader's average speed for gap conversion
    pub cumulative_time: f64,

    pub compound: &'a TireCompound,

    pub tire_age: Option<u32>,

    /// Latest interpolated sample at or before the query instant
    pub sample: &'a TelemetrySample,
}

/// Select the lap governing `session_time` for an ordered lap sequence.
///
/// Returns the lap plus a completeness flag: `false` when the lap is still
/// being driven, `true` when it finished at or before the query instant and
/// no successor lap has started. `None` when lap 1 has not started yet.
pub(crate) fn governing_lap(laps: &[LapData], session_time: f64) -> Option<(&LapData, bool)> {
    let mut in_progress: Option<&LapData> = None;
    let mut overlap = false;

    for lap in laps {
        let record = &lap.record;
        let started = record.start <= session_time;
        let unfinished = record.completion.is_none_or(|c| c > session_time);
        if started && unfinished {
            match in_progress {
                None => in_progress = Some(lap),
                Some(current) => {
                    // Overlapping lap records are a data-quality anomaly;
                    // resolve deterministically by earliest start.
                    overlap = true;
                    if record.start < current.record.start {
                        in_progress = Some(lap);
                    }
                }
            }
        }
    }

    if overlap {
        warn!(session_time, "multiple in-progress laps at one instant; picking earliest start");
    }

    if let Some(lap) = in_progress {
        return Some((lap, false));
    }

    laps.iter()
        .filter(|lap| lap.record.completion.is_some_and(|c| c <= session_time))
        .next_back()
        .map(|lap| (lap, true))
}

/// Latest sample with timestamp at or before `session_time`.
///
/// Samples are time-ordered within a lap, so this is a binary search.
pub(crate) fn latest_at<T>(
    samples: &[T],
    session_time: f64,
    time_of: impl Fn(&T) -> f64,
) -> Option<&T> {
    let idx = samples.partition_point(|sample| time_of(sample) <= session_time);
    idx.checked_sub(1).and_then(|i| samples.get(i))
}

/// Elapsed race duration: completed-lap durations plus, while the governing
/// lap is still running, the partial time since its start.
///
/// An approximation for gap conversion only; laps with an undefined duration
/// are skipped rather than estimated.
pub(crate) fn cumulative_time(
    laps: &[LapData],
    governing: &LapRecord,
    session_time: f64,
    lap_complete: bool,
) -> f64 {
    let completed: f64 = laps
        .iter()
        .filter_map(|lap| {
            let record = &lap.record;
            match record.completion {
                Some(completion) if completion <= session_time => record.duration,
                _ => None,
            }
        })
        .sum();

    if lap_complete { completed } else { completed + (session_time - governing.start) }
}

/// Resolve one participant's full state at `session_time`.
pub(crate) fn resolve<'a>(
    driver: &'a DriverRecords,
    metadata: &TrackMetadata,
    session_time: f64,
) -> Option<DriverState<'a>> {
    let (lap, complete) = governing_lap(&driver.laps, session_time)?;
    let sample = latest_at(&lap.telemetry, session_time, |s| s.time)?;

    let record = &lap.record;
    let total_distance =
        (f64::from(record.lap_number) - 1.0) * metadata.track_length() + sample.distance;

    Some(DriverState {
        participant: &driver.participant,
        lap_number: record.lap_number,
        distance: sample.distance,
        total_distance,
        cumulative_time: cumulative_time(&driver.laps, record, session_time, complete),
        compound: &record.compound,
        tire_age: record.tire_age,
        sample,
    })
}
