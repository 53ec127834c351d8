// Authentication error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::{error, warn};

use crate::error::error_response;

/// Failures produced by the auth endpoints and the request gate
#[derive(Debug)]
pub enum AuthError {
    /// Missing or blank input fields
    ValidationError(String),
    /// Unknown email or wrong password; clients cannot tell which
    InvalidCredentials,
    /// Email already registered
    EmailAlreadyExists,
    /// No Authorization header / refresh cookie, or wrong scheme
    MissingToken,
    /// Signature did not verify
    InvalidToken,
    /// Past expiry
    ExpiredToken,
    /// Structurally not a token
    MalformedToken,
    /// Token verified but the user record no longer exists
    UserNotFound,
    DatabaseError(String),
    PasswordHashError,
    TokenGenerationError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::EmailAlreadyExists => write!(f, "User already exists"),
            AuthError::MissingToken => write!(f, "Missing authentication token"),
            AuthError::InvalidToken => write!(f, "Invalid token"),
            AuthError::ExpiredToken => write!(f, "Token has expired"),
            AuthError::MalformedToken => write!(f, "Malformed token"),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AuthError::PasswordHashError => write!(f, "Password hashing error"),
            AuthError::TokenGenerationError(msg) => write!(f, "Token generation error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let detail = format!("{:?}", self);
        let (status, message) = match &self {
            AuthError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            // The observed system reports the uniqueness conflict as a 400
            AuthError::EmailAlreadyExists => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            // Credential failures collapse into one generic message; the
            // concrete reason is only logged
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::ExpiredToken
            | AuthError::MalformedToken
            | AuthError::UserNotFound => {
                warn!("Rejected request credential: {}", self);
                (StatusCode::UNAUTHORIZED, "Not authorized".to_string())
            }
            AuthError::DatabaseError(msg) => {
                error!("Database error in auth: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AuthError::PasswordHashError => {
                error!("Password hashing error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AuthError::TokenGenerationError(msg) => {
                error!("Token generation error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        error_response(status, message, Some(detail))
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::EmailAlreadyExists => StatusCode::BAD_REQUEST,
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::ExpiredToken
            | AuthError::MalformedToken
            | AuthError::UserNotFound => StatusCode::UNAUTHORIZED,
            AuthError::DatabaseError(_)
            | AuthError::PasswordHashError
            | AuthError::TokenGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
