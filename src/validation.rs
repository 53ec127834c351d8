// Validation utilities module
// Provides custom validation functions for domain-specific rules

use validator::ValidationError;

/// Validates that a text field is non-empty after trimming
/// Whitespace-only input counts as missing
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}
