//! Concrete session data sources

pub mod recorded;

pub use recorded::RecordedSession;
