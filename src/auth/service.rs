// Authentication service - business logic layer

use tracing::{debug, info};

use crate::auth::{
    error::AuthError,
    models::PublicUser,
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};

/// Outcome of a successful register or login: a fresh token pair plus the
/// public user fields
pub struct IssuedSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Authentication service coordinating all auth operations
/// Tokens are stateless: validity is a function of signature and expiry only,
/// nothing is persisted server-side
pub struct AuthService {
    users: UserRepository,
    tokens: TokenService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(users: UserRepository, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and issue a token pair
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<IssuedSession, AuthError> {
        let password_hash = PasswordService::hash_password(password)?;
        let user = self.users.create(name, email, &password_hash).await?;

        info!("Registered user {}", user.id);
        self.issue_session(user.into())
    }

    /// Verify credentials and issue a token pair
    /// Unknown email and wrong password produce the same error so clients
    /// cannot probe which emails are registered
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        debug!("User {} logged in", user.id);
        self.issue_session(user.into())
    }

    /// Exchange a valid refresh token for a new access token
    /// The refresh token itself is left untouched
    pub async fn refresh(&self, refresh_token: &str) -> Result<(String, PublicUser), AuthError> {
        let claims = self.tokens.verify(refresh_token)?;

        let user = self
            .users
            .find_public_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let access_token = self.tokens.issue_access_token(user.id)?;
        debug!("Refreshed access token for user {}", user.id);
        Ok((access_token, user))
    }

    /// Resolve the user behind a bearer token presented to a protected route
    pub async fn authenticate(&self, token: &str) -> Result<PublicUser, AuthError> {
        let claims = self.tokens.verify(token)?;

        self.users
            .find_public_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    fn issue_session(&self, user: PublicUser) -> Result<IssuedSession, AuthError> {
        let access_token = self.tokens.issue_access_token(user.id)?;
        let refresh_token = self.tokens.issue_refresh_token(user.id)?;

        Ok(IssuedSession {
            access_token,
            refresh_token,
            user,
        })
    }
}
