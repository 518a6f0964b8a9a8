//! Error types for the checksum Bloom filter

use thiserror::Error;

/// Errors that can occur when configuring a Bloom filter
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),
}

impl FilterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        FilterError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FilterError>;
