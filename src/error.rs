//! Error types for session reconstruction.
//!
//! Only session-wide problems surface as errors: a session whose records
//! cannot anchor the race at all, a data source that fails while the records
//! are being materialized, or records that fail the one-time load
//! validation. Per-participant resolution never errors; a participant with
//! no resolvable state at some session time is simply absent from tower and
//! snapshot output.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed source error for load-boundary failures.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for session operations.
pub type Result<T, E = SessionError> = std::result::Result<T, E>;

/// Main error type for session loading and metadata resolution.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SessionError {
    /// The session cannot be analyzed at all, e.g. no participant has a
    /// completed lap so the track length cannot be derived.
    #[error("insufficient session data: {reason}")]
    InsufficientData { reason: String },

    /// The data source failed while materializing records at load time.
    #[error("session provider error: {context}")]
    Provider {
        context: String,
        #[source]
        source: BoxedSource,
    },

    /// A participant's records violate the load-time ordering or field
    /// dependency rules.
    #[error("invalid records for participant '{participant}': {details}")]
    Validation { participant: String, details: String },

    /// A recorded session document could not be read or parsed.
    #[error("session document error: {path}")]
    Document {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
}

impl SessionError {
    /// Helper constructor for insufficient-data failures.
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        SessionError::InsufficientData { reason: reason.into() }
    }

    /// Helper constructor for provider failures with source context.
    pub fn provider(context: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        SessionError::Provider { context: context.into(), source: source.into() }
    }

    /// Helper constructor for load-time validation failures.
    pub fn validation(participant: impl Into<String>, details: impl Into<String>) -> Self {
        SessionError::Validation { participant: participant.into(), details: details.into() }
    }

    /// Helper constructor for session document failures.
    pub fn document(path: PathBuf, source: impl Into<BoxedSource>) -> Self {
        SessionError::Document { path, source: source.into() }
    }
}
