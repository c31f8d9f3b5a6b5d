//! Error types for probe construction.

use thiserror::Error;

/// Result type alias for probe construction.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors that can occur while building probes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The initial-delay annotation is not a usable duration.
    #[error("invalid {key} duration format: {reason}")]
    InvalidDurationOverride { key: String, reason: String },
}
