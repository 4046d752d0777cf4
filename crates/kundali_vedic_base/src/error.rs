//! Error types for Vedic base calculations.

use thiserror::Error;

/// Errors from parsing Vedic inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Language code is not one of `en`, `ta`, `hi`.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}
