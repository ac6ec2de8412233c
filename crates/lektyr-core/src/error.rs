//! Error types for the Lektyr catalog.

/// Errors that can occur across the Lektyr catalog crates.
///
/// The enum is `#[non_exhaustive]` so new error kinds can be added
/// without breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A book draft failed validation (missing or out-of-range field).
    ///
    /// The field name, when known, is part of the rendered message.
    #[error(
        "Validation error: {}{message}",
        field.as_deref().map(|f| format!("{f}: ")).unwrap_or_default()
    )]
    Validation {
        /// Field that failed validation, when known
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// No book exists with the given id.
    #[error("Book not found: {id}")]
    NotFound {
        /// Book id that was not found
        id: String,
    },

    /// The stored session token has lapsed; the caller must log in again.
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// The server rejected the operation for lack of privileges.
    #[error("Access denied: {message}")]
    Forbidden {
        /// Why the operation was denied
        message: String,
    },

    /// I/O error (catalog file, session file, network socket).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Error returned by a remote backend.
    #[error("API error: {message}")]
    Api {
        /// HTTP status code, when the response carried one
        status: Option<u16>,
        /// Human-readable error message
        message: String,
    },
}

/// Convenience `Result` type alias for Lektyr operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether retrying the same operation could succeed.
    ///
    /// Network and I/O failures are transient; validation failures,
    /// missing books, and expired sessions are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Api { status, .. } => matches!(status, None | Some(500..=599)),
            Error::Validation { .. } => false,
            Error::NotFound { .. } => false,
            Error::SessionExpired => false,
            Error::Forbidden { .. } => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new not-found error for the given book id.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new forbidden error.
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Error::Forbidden {
            message: message.into(),
        }
    }

    /// Creates a new API error with an HTTP status.
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Api {
            status: Some(status),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("title must not be empty");
        assert_eq!(err.to_string(), "Validation error: title must not be empty");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("b-123");
        assert_eq!(err.to_string(), "Book not found: b-123");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(!Error::validation("x").is_retryable());
        assert!(!Error::SessionExpired.is_retryable());
        assert!(!Error::not_found("b-1").is_retryable());
        assert!(!Error::api(401, "unauthorized").is_retryable());
        assert!(Error::api(503, "unavailable").is_retryable());

        let io = std::io::Error::other("socket closed");
        assert!(Error::from(io).is_retryable());
    }

    #[test]
    fn test_validation_display_names_the_field() {
        let err = Error::validation_field("author", "is required");
        assert_eq!(err.to_string(), "Validation error: author: is required");
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = Error::validation_field("readYear", "must not be empty");
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error variant");
        };
        assert_eq!(field, Some("readYear".to_string()));
        assert_eq!(message, "must not be empty");
    }

    #[test]
    fn test_serde_error_not_retryable() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
        let err: Error = serde_err.into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
