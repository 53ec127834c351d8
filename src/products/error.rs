use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::error::error_response;

/// Error types for product operations
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// A required text field was missing or blank after trimming
    #[error("Please fill in all fields")]
    MissingFields,

    /// Unknown id, or an id that does not parse; the two are
    /// indistinguishable to clients
    #[error("product not found")]
    NotFound,

    /// Authenticated requester does not own the record
    #[error("{0}")]
    Forbidden(&'static str),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for ProductError {
    fn from(err: sqlx::Error) -> Self {
        ProductError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let detail = format!("{:?}", self);
        let (status, message) = match &self {
            ProductError::MissingFields => (StatusCode::BAD_REQUEST, self.to_string()),
            ProductError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ProductError::Forbidden(_) => {
                warn!("Ownership check failed: {}", self);
                (StatusCode::FORBIDDEN, self.to_string())
            }
            ProductError::DatabaseError(msg) => {
                error!("Database error in products: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        error_response(status, message, Some(detail))
    }
}
