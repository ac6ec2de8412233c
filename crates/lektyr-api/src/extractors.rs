//! Request extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::request::Parts;

use lektyr_auth::{user_from_parts, AuthenticatedUser};

/// The authenticated caller, when the auth middleware injected one.
///
/// `None` either means auth is disabled (dev mode) or the route sits
/// outside the auth layer; handlers decide what that implies.
#[derive(Debug, Clone, Default)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(user_from_parts(parts).cloned()))
    }
}
