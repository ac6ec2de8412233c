//! Auth-specific error types.

/// Errors that can occur during authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header or bearer token present.
    #[error("missing authentication token")]
    MissingToken,

    /// Token format is invalid (not a valid JWT).
    #[error("invalid token format: {0}")]
    InvalidFormat(String),

    /// JWT signature verification failed.
    #[error("invalid token signature: {0}")]
    InvalidSignature(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// The authenticated user lacks the required role.
    #[error("access denied: {0} role required")]
    Forbidden(&'static str),

    /// Token is missing a required claim.
    #[error("token missing claim '{0}'")]
    MissingClaim(&'static str),

    /// Reading or writing the session file failed.
    #[error("session file error: {0}")]
    SessionFile(String),
}

impl AuthError {
    /// Whether this error should result in a 4xx (vs. a 500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken
                | AuthError::InvalidFormat(_)
                | AuthError::InvalidSignature(_)
                | AuthError::Expired
                | AuthError::Forbidden(_)
                | AuthError::MissingClaim(_)
        )
    }
}
