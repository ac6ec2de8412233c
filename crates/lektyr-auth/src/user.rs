//! Authenticated user identity and extraction helpers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a user is allowed to do with the catalog.
///
/// Readers may browse; mutations (add, edit, delete) require `Admin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including mutations.
    Admin,
    /// Read-only access.
    #[default]
    Reader,
}

impl Role {
    /// Whether this role may mutate the catalog.
    pub fn can_write(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Reader => write!(f, "reader"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "reader" => Ok(Role::Reader),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// An authenticated user identity, extracted from a validated token.
///
/// Stored in HTTP request extensions by the auth middleware, where route
/// handlers pick it up for role checks.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Login name (the token's `sub` claim).
    pub subject: String,
    /// Display name (the token's `name` claim).
    pub full_name: String,
    /// Granted role.
    pub role: Role,
}

/// Extract the `AuthenticatedUser` from HTTP request `Parts`, if present.
pub fn user_from_parts(parts: &http::request::Parts) -> Option<&AuthenticatedUser> {
    parts.extensions.get::<AuthenticatedUser>()
}
