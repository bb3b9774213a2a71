//! Race state reconstruction and timing tower engine.
//!
//! Paddock rebuilds the instantaneous state of a multi-participant race
//! (positions, gaps, tire status, telemetry) at any point in session time,
//! from irregularly-sampled historical records (lap boundaries, telemetry
//! samples, track status events).
//!
//! # How it works
//!
//! A [`SessionProvider`] materializes the session's records once; the loaded
//! [`Session`] then answers queries against its race clock: advance the
//! clock, ask for a ranked [`TimingTower`], per-participant
//! [`TelemetrySnapshot`]s, or (x, y) [`PositionSnapshot`]s. Every query is a
//! full recomputation over the immutable records; nothing is cached across
//! ticks, and a participant with no resolvable state at an instant is simply
//! omitted.
//!
//! Gaps are an approximation by design: distance deficits are converted to
//! time at the leader's average speed, since recorded sessions carry no
//! timing-loop data.
//!
//! # Example
//!
//! ```rust,no_run
//! use paddock::{Paddock, TowerMode};
//!
//! #[tokio::main]
//! async fn main() -> paddock::Result<()> {
//!     let mut session = Paddock::open("race.yaml").await?;
//!
//!     session.advance_clock(60);
//!     let tower = session.timing_tower(&TowerMode::Leader);
//!     for entry in &tower.positions {
//!         println!("{:2}. {} {}", entry.rank, entry.code, entry.detail);
//!     }
//!     Ok(())
//! }
//! ```

// Core engine
pub mod clock;
mod error;
pub mod resolver;
pub mod session;
pub mod snapshot;
pub mod tower;
pub mod track;
pub mod types;

// Data source boundary
pub mod provider;
pub mod providers;

#[cfg(test)]
mod test_utils;

// Core exports
pub use error::{BoxedSource, Result, SessionError};
pub use resolver::DriverState;
pub use session::Session;
pub use snapshot::{PositionSnapshot, TelemetrySnapshot};
pub use tower::{TimingTower, TowerEntry, TowerMode};
pub use track::TrackMetadata;
pub use types::*;

// Data source exports
pub use provider::SessionProvider;
pub use providers::RecordedSession;

/// Unified entry point for loading sessions.
///
/// # Examples
///
/// ## Recorded session document
/// ```rust,no_run
/// use paddock::Paddock;
///
/// # #[tokio::main]
/// # async fn main() -> paddock::Result<()> {
/// let session = Paddock::open("race.yaml").await?;
/// # Ok(())
/// # }
/// ```
///
/// ## Custom provider
/// ```rust,ignore
/// let session = Paddock::load(my_provider).await?;
/// ```
pub struct Paddock;

impl Paddock {
    /// Load a session from any data source.
    ///
    /// Materializes every record sequence, validates ordering once, and
    /// derives track metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider fails while producing records
    /// - Records violate the load-time ordering contracts
    /// - No completed lap with telemetry exists (track length underivable)
    pub async fn load<P: SessionProvider>(provider: P) -> Result<Session> {
        Session::load(provider).await
    }

    /// Open a recorded session document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// loaded records cannot anchor a session (see [`Paddock::load`]).
    pub async fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Session> {
        let provider = RecordedSession::open(path).await?;
        Session::load(provider).await
    }
}
