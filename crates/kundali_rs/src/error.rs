use kundali_config::ConfigError;
use kundali_engine::EngineError;
use kundali_locate::LocateError;
use thiserror::Error;

/// How a caller should treat a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed date, time, timezone or coordinates, or an unsupported language.
    InvalidInput,
    /// Ephemeris missing, or a geocoder or network failure.
    CollaboratorUnavailable,
    /// A collaborator answered with something unusable.
    ComputationFailure,
}

/// Error type for the facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KundaliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("worker task failed: {0}")]
    Worker(String),
}

impl KundaliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Engine(e) => match e {
                EngineError::InvalidDate(_)
                | EngineError::InvalidTime(_)
                | EngineError::InvalidTimezone(_)
                | EngineError::UnsupportedLanguage(_)
                | EngineError::InvalidCoordinates(_) => ErrorKind::InvalidInput,
                EngineError::EphemerisUnavailable(_) => ErrorKind::CollaboratorUnavailable,
                _ => ErrorKind::ComputationFailure,
            },
            Self::Locate(_) => ErrorKind::CollaboratorUnavailable,
            Self::Config(_) => ErrorKind::InvalidInput,
            Self::Worker(_) => ErrorKind::ComputationFailure,
        }
    }

    /// True only for [`ErrorKind::InvalidInput`]. Computation failures are
    /// reported like an unavailable collaborator.
    pub fn is_client_error(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

impl From<tokio::task::JoinError> for KundaliError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Worker(e.to_string())
    }
}
