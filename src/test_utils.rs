//! Test fixtures shared across the crate's test modules.
//!
//! The scripted three-car session is deliberately small enough to hand-check:
//! lap 1 runs 10..40 for the leader, the track measures 300 m, and at race
//! time 40 (session time 50) the field sits at total distances 500 / 480 /
//! 300 with the leader averaging 12.5 m/s.

use async_trait::async_trait;

use crate::Result;
use crate::provider::SessionProvider;
use crate::session::{DriverRecords, LapData, Session};
use crate::types::{
    CarSample, LapRecord, Participant, TelemetrySample, TireCompound, TrackStatusEvent,
};

/// Completed lap with duration derived from the boundary offsets
pub fn completed_lap(lap_number: u32, start: f64, completion: f64) -> LapRecord {
    LapRecord {
        lap_number,
        start,
        completion: Some(completion),
        duration: Some(completion - start),
        compound: TireCompound::default(),
        tire_age: None,
    }
}

/// Lap that has started but not finished
pub fn open_lap(lap_number: u32, start: f64) -> LapRecord {
    LapRecord {
        lap_number,
        start,
        completion: None,
        duration: None,
        compound: TireCompound::default(),
        tire_age: None,
    }
}

/// Interpolated sample carrying only time and distance
pub fn sample(time: f64, distance: f64) -> TelemetrySample {
    TelemetrySample { time, distance, ..TelemetrySample::default() }
}

/// Interpolated sample with a world position
pub fn sample_at(time: f64, distance: f64, x: f64, y: f64) -> TelemetrySample {
    TelemetrySample { time, distance, x, y, ..TelemetrySample::default() }
}

/// Raw channel sample
pub fn car(time: f64, speed: f64, rpm: f64, gear: i8, throttle: f64, drs: u8) -> CarSample {
    CarSample { time, speed, rpm, gear, throttle, brake: false, drs }
}

pub fn lap_data(record: LapRecord, telemetry: Vec<TelemetrySample>) -> LapData {
    LapData { record, telemetry, car_data: Vec::new() }
}

pub fn lap_data_full(
    record: LapRecord,
    telemetry: Vec<TelemetrySample>,
    car_data: Vec<CarSample>,
) -> LapData {
    LapData { record, telemetry, car_data }
}

pub fn driver(id: &str, code: &str, laps: Vec<LapData>) -> DriverRecords {
    DriverRecords { participant: Participant::new(id, code), laps }
}

/// The scripted three-car field described in the module docs
pub fn three_car_drivers() -> Vec<DriverRecords> {
    let mut ver_lap1 = completed_lap(1, 10.0, 40.0);
    ver_lap1.compound = TireCompound::Soft;
    ver_lap1.tire_age = Some(1);
    let mut ver_lap2 = open_lap(2, 40.0);
    ver_lap2.compound = TireCompound::Soft;
    ver_lap2.tire_age = Some(5);

    let mut ham_lap1 = completed_lap(1, 10.0, 41.0);
    ham_lap1.compound = TireCompound::Medium;
    ham_lap1.tire_age = Some(1);
    let mut ham_lap2 = open_lap(2, 41.0);
    ham_lap2.compound = TireCompound::Medium;
    ham_lap2.tire_age = Some(3);

    let mut lec_lap1 = open_lap(1, 10.0);
    lec_lap1.compound = TireCompound::Unknown("PROTO".to_string());

    vec![
        driver(
            "1",
            "VER",
            vec![
                lap_data_full(
                    ver_lap1,
                    vec![
                        sample(10.5, 0.0),
                        sample(20.0, 100.0),
                        sample(30.0, 200.0),
                        sample(39.5, 300.0),
                    ],
                    vec![car(10.5, 80.0, 9000.0, 2, 100.0, 0)],
                ),
                lap_data_full(
                    ver_lap2,
                    vec![sample_at(41.0, 10.0, 30.0, -5.0), sample_at(49.0, 200.0, 120.5, -42.0)],
                    vec![
                        car(41.0, 260.0, 11_000.0, 6, 90.0, 8),
                        car(49.0, 280.0, 11_500.0, 7, 98.0, 12),
                    ],
                ),
            ],
        ),
        driver(
            "44",
            "HAM",
            vec![
                lap_data_full(
                    ham_lap1,
                    vec![sample(10.6, 0.0), sample(40.5, 299.0)],
                    vec![car(10.6, 78.0, 8800.0, 2, 100.0, 0)],
                ),
                lap_data_full(
                    ham_lap2,
                    vec![sample_at(42.0, 15.0, 35.0, -6.0), sample_at(49.5, 180.0, 100.0, -40.0)],
                    vec![car(49.5, 275.0, 11_300.0, 7, 95.0, 8)],
                ),
            ],
        ),
        driver(
            "16",
            "LEC",
            vec![lap_data(
                lec_lap1,
                vec![sample_at(11.0, 5.0, 12.0, -2.0), sample_at(49.0, 300.0, 60.0, -35.0)],
            )],
        ),
    ]
}

/// Track status timeline used by the fixture session
pub fn status_events() -> Vec<TrackStatusEvent> {
    vec![
        TrackStatusEvent { time: 9.0, code: "1".to_string() },
        TrackStatusEvent { time: 60.0, code: "2".to_string() },
        TrackStatusEvent { time: 75.0, code: "99".to_string() },
    ]
}

/// Fully loaded fixture session with the clock at race time zero
pub fn three_car_session() -> Session {
    Session::from_parts(three_car_drivers(), status_events()).expect("fixture session loads")
}

type ScriptedLap = (LapRecord, Vec<TelemetrySample>, Vec<CarSample>);

/// In-memory provider for exercising the load path
pub struct ScriptedProvider {
    drivers: Vec<(Participant, Vec<ScriptedLap>)>,
    status: Vec<TrackStatusEvent>,
}

impl ScriptedProvider {
    pub fn new(drivers: Vec<(Participant, Vec<ScriptedLap>)>, status: Vec<TrackStatusEvent>) -> Self {
        Self { drivers, status }
    }

    pub fn single_driver(id: &str, code: &str, laps: Vec<ScriptedLap>) -> Self {
        Self::new(vec![(Participant::new(id, code), laps)], Vec::new())
    }

    fn laps_of(&self, participant: &str) -> &[ScriptedLap] {
        self.drivers
            .iter()
            .find(|(p, _)| p.id == participant)
            .map(|(_, laps)| laps.as_slice())
            .unwrap_or(&[])
    }
}

#[async_trait]
impl SessionProvider for ScriptedProvider {
    async fn participants(&mut self) -> Result<Vec<Participant>> {
        Ok(self.drivers.iter().map(|(p, _)| p.clone()).collect())
    }

    async fn laps(&mut self, participant: &str) -> Result<Vec<LapRecord>> {
        Ok(self.laps_of(participant).iter().map(|(record, _, _)| record.clone()).collect())
    }

    async fn lap_telemetry(
        &mut self,
        participant: &str,
        lap_number: u32,
    ) -> Result<Vec<TelemetrySample>> {
        Ok(self
            .laps_of(participant)
            .iter()
            .find(|(record, _, _)| record.lap_number == lap_number)
            .map(|(_, telemetry, _)| telemetry.clone())
            .unwrap_or_default())
    }

    async fn lap_car_data(
        &mut self,
        participant: &str,
        lap_number: u32,
    ) -> Result<Vec<CarSample>> {
        Ok(self
            .laps_of(participant)
            .iter()
            .find(|(record, _, _)| record.lap_number == lap_number)
            .map(|(_, _, car_data)| car_data.clone())
            .unwrap_or_default())
    }

    async fn track_status_events(&mut self) -> Result<Vec<TrackStatusEvent>> {
        Ok(self.status.clone())
    }
}
