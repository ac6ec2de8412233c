//! Error types for lektyr-cli

use thiserror::Error;

/// Result type alias for lektyr-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lektyr-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from lektyr-core (validation, not-found, API failures)
    #[error("{0}")]
    Core(#[from] lektyr_core::Error),

    /// Configuration problem
    #[error("Config error: {0}")]
    Config(String),

    /// The user declined a confirmation prompt
    #[error("aborted: {0}")]
    Aborted(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this is the expired-session case, which gets a dedicated
    /// "log in again" hint at the top level.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::Core(lektyr_core::Error::SessionExpired))
    }
}
