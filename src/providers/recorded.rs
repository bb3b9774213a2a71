//! Recorded session provider backed by a YAML document

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::error::{Result, SessionError};
use crate::provider::SessionProvider;
use crate::types::{CarSample, LapRecord, Participant, TelemetrySample, TrackStatusEvent};

/// Session provider reading a pre-materialized recording.
///
/// The document format groups both sample streams under the lap they belong
/// to, so one file carries everything the engine queries:
///
/// ```yaml
/// participants:
///   - id: "1"
///     code: VER
///     laps:
///       - lap_number: 1
///         start: 10.0
///         completion: 100.5
///         duration: 90.5
///         compound: SOFT
///         tire_age: 1
///         telemetry:
///           - { time: 10.4, distance: 12.0, x: 5.0, y: -1.0 }
///         car_data:
///           - { time: 10.4, speed: 82.0, rpm: 9000.0, gear: 2, throttle: 100.0, drs: 0 }
/// track_status:
///   - { time: 9.0, code: "1" }
/// ```
#[derive(Debug)]
pub struct RecordedSession {
    document: SessionDocument,
}

#[derive(Debug, Deserialize)]
struct SessionDocument {
    participants: Vec<ParticipantRecords>,
    #[serde(default)]
    track_status: Vec<TrackStatusEvent>,
}

#[derive(Debug, Deserialize)]
struct ParticipantRecords {
    id: String,
    code: String,
    #[serde(default)]
    laps: Vec<LapRecords>,
}

#[derive(Debug, Deserialize)]
struct LapRecords {
    #[serde(flatten)]
    record: LapRecord,
    #[serde(default)]
    telemetry: Vec<TelemetrySample>,
    #[serde(default)]
    car_data: Vec<CarSample>,
}

impl RecordedSession {
    /// Open a recorded session document from disk
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| SessionError::document(path.to_path_buf(), err))?;

        let provider = Self::parse(&text)
            .map_err(|err| match err {
                SessionError::Document { source, .. } => {
                    SessionError::Document { path: path.to_path_buf(), source }
                }
                other => other,
            })?;

        info!(
            path = %path.display(),
            participants = provider.document.participants.len(),
            "opened recorded session document"
        );
        Ok(provider)
    }

    /// Parse a recorded session document from a string
    pub fn parse(document: &str) -> Result<Self> {
        let document: SessionDocument = serde_yaml_ng::from_str(document)
            .map_err(|err| SessionError::document(PathBuf::from("<inline>"), err))?;
        Ok(Self { document })
    }

    fn participant_records(&self, participant: &str) -> Result<&ParticipantRecords> {
        self.document.participants.iter().find(|p| p.id == participant).ok_or_else(|| {
            SessionError::provider(
                "recorded session lookup",
                anyhow!("unknown participant '{participant}'"),
            )
        })
    }

    fn lap_records(&self, participant: &str, lap_number: u32) -> Result<&LapRecords> {
        self.participant_records(participant)?
            .laps
            .iter()
            .find(|lap| lap.record.lap_number == lap_number)
            .ok_or_else(|| {
                SessionError::provider(
                    "recorded session lookup",
                    anyhow!("participant '{participant}' has no lap {lap_number}"),
                )
            })
    }
}

#[async_trait]
impl SessionProvider for RecordedSession {
    async fn participants(&mut self) -> Result<Vec<Participant>> {
        Ok(self
            .document
            .participants
            .iter()
            .map(|p| Participant::new(p.id.clone(), p.code.clone()))
            .collect())
    }

    async fn laps(&mut self, participant: &str) -> Result<Vec<LapRecord>> {
        Ok(self.participant_records(participant)?.laps.iter().map(|l| l.record.clone()).collect())
    }

    async fn lap_telemetry(
        &mut self,
        participant: &str,
        lap_number: u32,
    ) -> Result<Vec<TelemetrySample>> {
        Ok(self.lap_records(participant, lap_number)?.telemetry.clone())
    }

    async fn lap_car_data(
        &mut self,
        participant: &str,
        lap_number: u32,
    ) -> Result<Vec<CarSample>> {
        Ok(self.lap_records(participant, lap_number)?.car_data.clone())
    }

    async fn track_status_events(&mut self) -> Result<Vec<TrackStatusEvent>> {
        Ok(self.document.track_status.clone())
    }
}
