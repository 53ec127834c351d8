// Authentication middleware for protected routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use tracing::debug;

use crate::auth::error::AuthError;
use crate::auth::models::PublicUser;
use crate::AppState;

/// Authenticated user extractor for protected routes
///
/// Requires `Authorization: Bearer <token>`. The token is verified against
/// the shared TokenService and the user row is resolved fresh on every
/// request; only id, name and email are loaded. Any failure surfaces as a
/// generic 401 with the concrete reason logged, not returned.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<PublicUser> for AuthenticatedUser {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::MissingToken)?;

        // Require the Bearer scheme
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let state = AppState::from_ref(state);
        let user = state.auth.authenticate(token).await?;

        debug!("Authenticated user {}", user.id);
        Ok(user.into())
    }
}
