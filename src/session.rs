//! Session context: loaded records plus the race clock.
//!
//! [`Session`] is the explicit context object every query runs against. The
//! time-series records are materialized once by a [`SessionProvider`],
//! validated once, and never mutated afterwards; the only mutable state is
//! the [`RaceClock`]. Each query is a full synchronous recomputation, so no
//! driver state is cached across ticks.

use tracing::{info, trace};

use crate::clock::RaceClock;
use crate::error::{Result, SessionError};
use crate::provider::SessionProvider;
use crate::resolver::{self, DriverState};
use crate::snapshot::{self, PositionSnapshot, TelemetrySnapshot};
use crate::tower::{self, TimingTower, TowerMode};
use crate::track::TrackMetadata;
use crate::types::{
    CarSample, LapRecord, Participant, TelemetrySample, TrackStatus, TrackStatusEvent,
};

/// One lap's record bundled with its two sample streams
#[derive(Debug, Clone)]
pub(crate) struct LapData {
    pub(crate) record: LapRecord,

    /// Distance-interpolated stream (ranking and positions)
    pub(crate) telemetry: Vec<TelemetrySample>,

    /// Raw per-lap channel stream (telemetry snapshots)
    pub(crate) car_data: Vec<CarSample>,
}

/// All loaded records for one participant, laps in ascending order
#[derive(Debug, Clone)]
pub(crate) struct DriverRecords {
    pub(crate) participant: Participant,
    pub(crate) laps: Vec<LapData>,
}

/// A loaded session: immutable records, derived track metadata, and the race
/// clock.
#[derive(Debug)]
pub struct Session {
    /// Participants in enumeration order; this order is the ranking
    /// tie-break.
    drivers: Vec<DriverRecords>,
    track_status: Vec<TrackStatusEvent>,
    metadata: TrackMetadata,
    clock: RaceClock,
}

impl Session {
    /// Load a session by materializing every record sequence from the
    /// provider.
    ///
    /// Record ordering and field dependencies are validated here, once;
    /// queries trust the data afterwards. Fails with
    /// [`SessionError::InsufficientData`] when track metadata cannot be
    /// derived (no completed lap with telemetry anywhere, or no lap-1
    /// anchor).
    pub async fn load<P: SessionProvider>(mut provider: P) -> Result<Self> {
        let participants = provider.participants().await?;
        info!(participants = participants.len(), "loading session records");

        let mut drivers = Vec::with_capacity(participants.len());
        for participant in participants {
            let records = provider.laps(&participant.id).await?;
            validate_laps(&participant, &records)?;

            let mut laps = Vec::with_capacity(records.len());
            for record in records {
                let telemetry =
                    provider.lap_telemetry(&participant.id, record.lap_number).await?;
                validate_stream(&participant, record.lap_number, "telemetry",
                    telemetry.iter().map(|s| s.time))?;

                let car_data = provider.lap_car_data(&participant.id, record.lap_number).await?;
                validate_stream(&participant, record.lap_number, "car data",
                    car_data.iter().map(|s| s.time))?;

                laps.push(LapData { record, telemetry, car_data });
            }

            drivers.push(DriverRecords { participant, laps });
        }

        let track_status = provider.track_status_events().await?;
        validate_status_events(&track_status)?;

        Self::from_parts(drivers, track_status)
    }

    /// Assemble a session from already-materialized records.
    pub(crate) fn from_parts(
        drivers: Vec<DriverRecords>,
        track_status: Vec<TrackStatusEvent>,
    ) -> Result<Self> {
        let metadata = TrackMetadata::derive(&drivers)?;
        info!(
            track_length = metadata.track_length(),
            race_start = metadata.race_start(),
            "session loaded"
        );

        Ok(Self { drivers, track_status, metadata, clock: RaceClock::new() })
    }

    /// Advance the race clock by a number of seconds
    pub fn advance_clock(&mut self, seconds: u64) {
        self.clock.advance(seconds);
    }

    /// Advance the race clock by one second
    pub fn tick(&mut self) {
        self.clock.tick();
    }

    /// Elapsed race time in whole seconds
    pub fn race_time(&self) -> u64 {
        self.clock.elapsed()
    }

    /// Current session time: race-start anchor plus elapsed race time.
    ///
    /// This is the value every time-series query is indexed by.
    pub fn session_time(&self) -> f64 {
        self.metadata.race_start() + self.clock.elapsed() as f64
    }

    /// Derived per-session constants
    pub fn metadata(&self) -> &TrackMetadata {
        &self.metadata
    }

    /// Participants in enumeration order
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.drivers.iter().map(|driver| &driver.participant)
    }

    /// Resolve one participant's reconstructed state at the current clock.
    ///
    /// `None` when the participant is unknown, has not started lap 1 yet, or
    /// has no telemetry at or before the current session time.
    pub fn driver_state(&self, participant: &str) -> Option<DriverState<'_>> {
        let driver = self.drivers.iter().find(|d| d.participant.id == participant)?;
        resolver::resolve(driver, &self.metadata, self.session_time())
    }

    /// Build the ranked timing tower at the current clock
    pub fn timing_tower(&self, mode: &TowerMode) -> TimingTower {
        let session_time = self.session_time();
        trace!(session_time, ?mode, "building timing tower");
        tower::build(&self.drivers, &self.metadata, self.track_status(), session_time, mode)
    }

    /// Instantaneous car channels for one participant at the current clock
    pub fn telemetry_snapshot(&self, participant: &str) -> Option<TelemetrySnapshot> {
        let driver = self.drivers.iter().find(|d| d.participant.id == participant)?;
        snapshot::telemetry_snapshot(driver, self.session_time())
    }

    /// (x, y) positions for every resolvable participant at the current
    /// clock
    pub fn position_snapshots(&self) -> Vec<PositionSnapshot> {
        snapshot::position_snapshots(&self.drivers, self.session_time())
    }

    /// Track status in effect at the current clock
    pub fn track_status(&self) -> TrackStatus {
        TrackStatus::resolve(&self.track_status, self.session_time())
    }
}

fn validate_laps(participant: &Participant, laps: &[LapRecord]) -> Result<()> {
    for pair in laps.windows(2) {
        if pair[1].lap_number <= pair[0].lap_number {
            return Err(SessionError::validation(
                &participant.id,
                format!(
                    "lap numbers not strictly ascending ({} then {})",
                    pair[0].lap_number, pair[1].lap_number
                ),
            ));
        }
    }

    for lap in laps {
        if lap.duration.is_some() && lap.completion.is_none() {
            return Err(SessionError::validation(
                &participant.id,
                format!("lap {} has a duration but no completion offset", lap.lap_number),
            ));
        }
    }

    Ok(())
}

fn validate_status_events(events: &[TrackStatusEvent]) -> Result<()> {
    let mut previous = f64::NEG_INFINITY;
    for event in events {
        if event.time < previous {
            return Err(SessionError::validation(
                "session",
                "track status events are not time-ordered",
            ));
        }
        previous = event.time;
    }
    Ok(())
}

fn validate_stream(
    participant: &Participant,
    lap_number: u32,
    stream: &str,
    times: impl Iterator<Item = f64>,
) -> Result<()> {
    let mut previous = f64::NEG_INFINITY;
    for time in times {
        if time < previous {
            return Err(SessionError::validation(
                &participant.id,
                format!("{stream} for lap {lap_number} is not time-ordered"),
            ));
        }
        previous = time;
    }
    Ok(())
}
