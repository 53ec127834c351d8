// Shared error envelope
// Every failure, whichever module it comes from, renders the same JSON shape:
// {"success": false, "message": ..., "stack": ...} with the stack detail
// suppressed in production

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::config::{environment, Environment};

/// JSON body used for every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    /// Internal rendering of the failure; omitted entirely in production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Build an error response in the shared envelope
///
/// `detail` carries the debug rendering of the failure for development use;
/// it never reaches clients in production mode.
pub fn error_response(status: StatusCode, message: String, detail: Option<String>) -> Response {
    let stack = match environment() {
        Environment::Production => None,
        Environment::Development => detail,
    };

    (
        status,
        Json(ErrorBody {
            success: false,
            message,
            stack,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_key_is_omitted_when_absent() {
        let body = ErrorBody {
            success: false,
            message: "product not found".to_string(),
            stack: None,
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"message\":\"product not found\""));
        assert!(!json.contains("stack"));
    }

    #[test]
    fn stack_key_is_present_when_set() {
        let body = ErrorBody {
            success: false,
            message: "Internal server error".to_string(),
            stack: Some("DatabaseError(\"connection refused\")".to_string()),
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"stack\""));
    }
}
