//! Error types for the horoscope and panchangam engines.

use kundali_ephem::EphemError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

/// Errors from chart or almanac generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    /// No ephemeris provider is configured.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),
    /// The provider answered with something that is not a usable angle.
    #[error(transparent)]
    Ephemeris(EphemError),
}

/// Latitude must be finite and within ±90°, longitude within ±180°.
pub fn check_coordinates(lat: f64, lon: f64) -> Result<(), EngineError> {
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(EngineError::InvalidCoordinates(format!("lat {lat}, lon {lon}")))
    }
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate(text) => Self::InvalidDate(text),
            TimeError::InvalidTime(text) => Self::InvalidTime(text),
            TimeError::UnknownTimezone(name) => Self::InvalidTimezone(name),
            other => Self::InvalidTimezone(other.to_string()),
        }
    }
}

impl From<EphemError> for EngineError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::Unavailable(msg) => Self::EphemerisUnavailable(msg),
            other => Self::Ephemeris(other),
        }
    }
}

impl From<VedicError> for EngineError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::UnsupportedLanguage(code) => Self::UnsupportedLanguage(code),
            other => Self::UnsupportedLanguage(other.to_string()),
        }
    }
}
