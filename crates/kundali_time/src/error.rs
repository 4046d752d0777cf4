//! Error types for calendar parsing and timezone localization.

use thiserror::Error;

/// Errors from parsing civil dates, clock times, and timezone names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date text is not `YYYY-MM-DD` or names a day that does not exist.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Clock text is not `HH:MM[:SS]` or is out of range.
    #[error("invalid time '{0}': expected HH:MM[:SS]")]
    InvalidTime(String),
    /// Name does not parse as an IANA timezone.
    #[error("no time zone found with key {0}")]
    UnknownTimezone(String),
    /// Wall-clock time could not be mapped to an instant in the zone.
    #[error("local time {0} has no mapping in zone {1}")]
    Unmappable(String, String),
}
