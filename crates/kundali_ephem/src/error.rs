//! Error types for ephemeris queries.

use thiserror::Error;

/// Errors from an ephemeris provider.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// No provider is configured or installed.
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
    /// Provider returned a value that is not a finite angle.
    #[error("ephemeris returned malformed longitude {value} for {body}")]
    Malformed { body: &'static str, value: f64 },
    /// Requested epoch lies outside the provider's usable range.
    #[error("julian date {0} outside supported range")]
    OutOfRange(f64),
}

