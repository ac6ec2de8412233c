//! Authentication primitives for Lektyr.
//!
//! Provides:
//! - [`Session`] / [`SessionFile`] — the client-side token + expiry record
//! - [`Claims`], [`issue_token`], [`verify_token`] — HS256 JWT handling
//! - [`AuthenticatedUser`] / [`Role`] — identity extracted from a valid token
//! - [`TokenValidator`] — trait for async token validation
//! - [`AuthLayer`] / [`AuthService`] — Tower middleware over `TokenValidator`
//! - [`AuthError`] — auth-specific error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod middleware;
mod session;
mod token;
mod user;

pub use error::AuthError;
pub use middleware::{AuthLayer, AuthService};
pub use session::{Session, SessionFile, DEFAULT_EXPIRES_IN_SECS};
pub use token::{issue_token, verify_token, Claims, JwtValidator};
pub use user::{user_from_parts, AuthenticatedUser, Role};

/// Configuration for the auth middleware.
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    /// Whether authentication is enforced. When false, all requests pass
    /// through unauthenticated (dev mode).
    pub enabled: bool,
}

/// Trait for validating bearer tokens and extracting user identity.
///
/// The middleware calls `validate()` with the raw bearer token and gets
/// back the authenticated user on success. [`JwtValidator`] is the
/// standard implementation; tests plug in their own.
pub trait TokenValidator: Send + Sync + 'static {
    /// Validate a token and return the authenticated user.
    fn validate(
        &self,
        token: &str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>,
    >;
}
