// Product data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::products::tags::TagsInput;
use crate::validation::validate_not_blank;

/// Product record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: Uuid,
    /// Owning user; legacy records may have none
    pub user_id: Option<i32>,
    #[schema(example = "Solar charger")]
    pub title: String,
    #[schema(example = "Folding panel with USB-C output")]
    pub description: String,
    #[schema(example = "Portable off-grid power")]
    pub summary: String,
    #[schema(example = json!(["solar", "power"]))]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating or updating a product
///
/// Title, summary and description are all required and must be non-empty
/// after trimming. Absent fields deserialize as empty and fail the blank
/// check. Tags are optional and accept either wire shape.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub title: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub summary: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub description: String,
    pub tags: Option<TagsInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_with_all_fields_validates() {
        let request: ProductRequest = serde_json::from_str(
            r#"{"title": "T", "summary": "S", "description": "D", "tags": "a, b"}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_with_blank_title_fails() {
        let request: ProductRequest = serde_json::from_str(
            r#"{"title": "   ", "summary": "S", "description": "D"}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn request_with_missing_field_fails() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"title": "T", "summary": "S"}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn tags_accept_both_shapes() {
        let csv: ProductRequest = serde_json::from_str(
            r#"{"title": "T", "summary": "S", "description": "D", "tags": "a, b"}"#,
        )
        .unwrap();
        assert!(csv.tags.is_some());

        let list: ProductRequest = serde_json::from_str(
            r#"{"title": "T", "summary": "S", "description": "D", "tags": ["a", "b"]}"#,
        )
        .unwrap();
        assert!(list.tags.is_some());
    }
}
