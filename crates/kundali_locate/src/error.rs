//! Error types for external location services.

use std::time::Duration;

use thiserror::Error;

/// Failures talking to a geocoder or other network collaborator.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LocateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned status {status}")]
    Status { service: &'static str, status: u16 },

    #[error("{0} did not answer within {1:?}")]
    Timeout(&'static str, Duration),

    #[error("unexpected response from {service}: {detail}")]
    Decode {
        service: &'static str,
        detail: String,
    },
}

pub type LocateResult<T> = Result<T, LocateError>;
