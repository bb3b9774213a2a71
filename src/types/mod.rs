//! Core types for the loaded session data model.
//!
//! Everything in this module is produced once by the data provider at load
//! time and treated as an immutable, read-only snapshot afterwards:
//!
//! - [`Participant`] identifies one entrant for the session lifetime
//! - [`LapRecord`] is one lap boundary with optional completion/duration
//! - [`TelemetrySample`] is the distance-interpolated stream used for
//!   ranking and position snapshots
//! - [`CarSample`] is the raw per-lap channel stream used for telemetry
//!   snapshots
//! - [`TrackStatusEvent`] / [`TrackStatus`] carry the session-wide flag
//!   timeline and its fixed display vocabulary
//!
//! Optional source fields (tire compound, tire age, lap duration) are
//! resolved once here, at the boundary, so queries never re-validate them:
//! unknown compounds become [`TireCompound::Unknown`], unknown DRS codes
//! become [`DrsState::Unknown`], and missing ages default to zero at render
//! time.

mod lap;
mod participant;
mod status;
mod telemetry;

pub use lap::{LapRecord, TireCompound};
pub use participant::Participant;
pub use status::{TrackStatus, TrackStatusEvent};
pub use telemetry::{CarSample, DrsState, TelemetrySample, decode_drs};
