// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public user fields, safe to return to clients
/// The credential hash never appears here
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PublicUser {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Registration request DTO
/// Absent fields deserialize as empty and fail the blank check
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub email: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub password: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub email: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub password: String,
}

/// Body returned by register, login and refresh
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_drops_credential_hash() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        };

        let public: PublicUser = user.into();
        let json = serde_json::to_string(&public).unwrap();

        assert!(json.contains("ada@example.com"));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn register_request_rejects_missing_fields() {
        // Absent keys default to empty strings and fail validation
        let request: RegisterRequest =
            serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn register_request_rejects_blank_fields() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name": "  ", "email": "a@x.com", "password": "p"}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn register_request_accepts_complete_input() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name": "A", "email": "a@x.com", "password": "p"}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn auth_response_uses_camel_case_access_token() {
        let response = AuthResponse {
            access_token: "token123".to_string(),
            user: PublicUser {
                id: 1,
                name: "A".to_string(),
                email: "a@x.com".to_string(),
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"accessToken\":\"token123\""));
        assert!(!json.contains("access_token"));
    }
}
