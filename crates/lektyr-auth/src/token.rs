//! HS256 JWT issue and verification.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{AuthError, AuthenticatedUser, Role, TokenValidator};

/// The claims carried by a Lektyr access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Login name.
    pub sub: String,
    /// Display name.
    pub name: String,
    /// Granted role.
    pub role: Role,
    /// Issued-at, seconds since the epoch.
    pub iat: u64,
    /// Expiry, seconds since the epoch.
    pub exp: u64,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            full_name: claims.name,
            role: claims.role,
        }
    }
}

/// Issues an HS256 token for the given user, valid for `ttl_secs`.
pub fn issue_token(
    secret: &str,
    username: &str,
    full_name: &str,
    role: Role,
    ttl_secs: u64,
) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp() as u64;
    let claims = Claims {
        sub: username.to_string(),
        name: full_name.to_string(),
        role,
        iat: now,
        exp: now + ttl_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::InvalidFormat(e.to_string()))
}

/// Verifies an HS256 token and returns its claims.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AuthError::InvalidSignature(e.to_string())
        }
        _ => AuthError::InvalidFormat(e.to_string()),
    })?;
    Ok(data.claims)
}

/// [`TokenValidator`] backed by a shared HS256 secret.
///
/// This is the validator the API server installs in its auth middleware.
pub struct JwtValidator {
    secret: String,
}

impl JwtValidator {
    /// A validator checking tokens against the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl TokenValidator for JwtValidator {
    fn validate(
        &self,
        token: &str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>,
    > {
        let result = verify_token(&self.secret, token).map(AuthenticatedUser::from);
        Box::pin(async move { result })
    }
}
