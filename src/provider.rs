//! Provider trait for session data sources

use async_trait::async_trait;

use crate::Result;
use crate::types::{CarSample, LapRecord, Participant, TelemetrySample, TrackStatusEvent};

/// Trait for materialized session data sources.
///
/// Providers abstract over where a recorded session comes from (a document
/// on disk, an archive service, a test script) and are consumed exactly once
/// by [`Session::load`](crate::Session::load): every sequence is
/// materialized up front and the engine never calls back into the provider
/// after load returns.
///
/// Ordering contracts the engine relies on (validated once at load):
/// - `participants` enumeration order is the ranking tie-break order
/// - `laps` are ordered by ascending lap number
/// - both sample streams are time-ordered within a lap
/// - `track_status_events` are time-ordered and span the whole session
#[async_trait]
pub trait SessionProvider: Send {
    /// Enumerate participants for the loaded session
    async fn participants(&mut self) -> Result<Vec<Participant>>;

    /// Ordered lap records for one participant
    async fn laps(&mut self, participant: &str) -> Result<Vec<LapRecord>>;

    /// Ordered distance-interpolated telemetry for one lap
    async fn lap_telemetry(
        &mut self,
        participant: &str,
        lap_number: u32,
    ) -> Result<Vec<TelemetrySample>>;

    /// Ordered raw per-lap channel samples for one lap
    async fn lap_car_data(&mut self, participant: &str, lap_number: u32)
    -> Result<Vec<CarSample>>;

    /// Ordered track status events for the whole session
    async fn track_status_events(&mut self) -> Result<Vec<TrackStatusEvent>>;
}
