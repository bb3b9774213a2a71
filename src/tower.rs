//! Timing tower construction and gap formatting

use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, trace};

use crate::resolver::{self, DriverState};
use crate::session::DriverRecords;
use crate::track::TrackMetadata;
use crate::types::TrackStatus;

/// Detail column selector for the timing tower.
///
/// Parsing never fails: anything outside the supported vocabulary is carried
/// in [`TowerMode::Unsupported`] and renders as a literal "ERR" detail per
/// entry rather than failing the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TowerMode {
    /// Delta to the race leader
    Leader,
    /// Interval to the car ahead
    Gap,
    /// Compound letter plus tire age
    Tires,
    /// Unrecognized mode string
    Unsupported(String),
}

impl FromStr for TowerMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "leader" => TowerMode::Leader,
            "gap" => TowerMode::Gap,
            "tires" => TowerMode::Tires,
            other => TowerMode::Unsupported(other.to_string()),
        })
    }
}

impl From<&str> for TowerMode {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|never: Infallible| match never {})
    }
}

/// One ranked row of the timing tower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TowerEntry {
    /// 1-based rank
    pub rank: u32,

    /// Participant display code
    pub code: String,

    /// Mode-dependent detail string
    pub detail: String,
}

/// Full timing tower at one query instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingTower {
    /// Leader's governing lap number; 0 when nobody has resolvable state
    pub lap: u32,

    /// Track status in effect at the query instant
    pub status: TrackStatus,

    /// Ranked entries, total distance descending
    pub positions: Vec<TowerEntry>,
}

/// Build the tower: resolve every participant, rank by total distance, and
/// format the mode-dependent detail column.
pub(crate) fn build(
    drivers: &[DriverRecords],
    metadata: &TrackMetadata,
    status: TrackStatus,
    session_time: f64,
    mode: &TowerMode,
) -> TimingTower {
    let mut states: Vec<DriverState<'_>> =
        drivers.iter().filter_map(|driver| resolver::resolve(driver, metadata, session_time)).collect();

    if states.is_empty() {
        debug!(session_time, "no participant has resolvable state; returning empty tower");
        return TimingTower { lap: 0, status, positions: Vec::new() };
    }

    // Stable sort: equal totals keep participant enumeration order.
    states.sort_by(|a, b| b.total_distance.total_cmp(&a.total_distance));

    let leader = &states[0];
    let leader_avg_speed = if leader.cumulative_time > 0.0 {
        leader.total_distance / leader.cumulative_time
    } else {
        // Nominal fallback for very early session times; yields a
        // near-meaningless but non-crashing gap.
        1.0
    };
    let track_length = metadata.track_length();

    trace!(
        session_time,
        entries = states.len(),
        leader = %leader.participant.code,
        leader_avg_speed,
        "built ranking"
    );

    let positions = states
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let detail = match mode {
                TowerMode::Leader if i == 0 => "Leader".to_string(),
                TowerMode::Leader => format_delta(
                    state.total_distance,
                    leader.total_distance,
                    track_length,
                    leader_avg_speed,
                ),
                TowerMode::Gap if i == 0 => "Gap".to_string(),
                TowerMode::Gap => format_delta(
                    state.total_distance,
                    states[i - 1].total_distance,
                    track_length,
                    leader_avg_speed,
                ),
                TowerMode::Tires => {
                    format!("{}{}", state.compound.letter(), state.tire_age.unwrap_or(0))
                }
                TowerMode::Unsupported(_) => "ERR".to_string(),
            };

            TowerEntry { rank: (i + 1) as u32, code: state.participant.code.clone(), detail }
        })
        .collect();

    TimingTower { lap: leader.lap_number, status, positions }
}

/// Format the spacing between two cars as either a lap-behind count or an
/// approximate time delta at the leader's average speed.
fn format_delta(
    behind_total: f64,
    ahead_total: f64,
    track_length: f64,
    leader_avg_speed: f64,
) -> String {
    let distance_gap = ahead_total - behind_total;
    let laps_behind = (distance_gap / track_length) as i64;

    if laps_behind >= 1 {
        if laps_behind == 1 {
            "+1 LAP".to_string()
        } else {
            format!("+{laps_behind} LAPS")
        }
    } else {
        let time_gap = if leader_avg_speed > 0.0 { distance_gap / leader_avg_speed } else { 0.0 };
        format!("+{:.3}s", time_gap.abs())
    }
}
