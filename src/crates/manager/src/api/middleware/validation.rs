//! Request validation utilities

use crate::api::error::{ApiError, ApiResult};
use crate::db::models::review::REVIEW_ACTIONS;

/// Validate that a required string field is not empty
pub fn validate_not_empty(value: &str, field_name: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::ValidationError(format!(
            "{} cannot be empty",
            field_name
        )));
    }
    Ok(())
}

/// Validate string length constraints
pub fn validate_string_length(
    value: &str,
    field_name: &str,
    min: usize,
    max: usize,
) -> ApiResult<()> {
    if value.len() < min || value.len() > max {
        return Err(ApiError::ValidationError(format!(
            "{} must be between {} and {} characters",
            field_name, min, max
        )));
    }
    Ok(())
}

/// Validate UUID format
pub fn validate_uuid(value: &str) -> ApiResult<uuid::Uuid> {
    uuid::Uuid::parse_str(value)
        .map_err(|_| ApiError::ValidationError(format!("Invalid UUID: {}", value)))
}

/// Validate a review action against the accepted set
pub fn validate_review_action(action: &str) -> ApiResult<()> {
    if !REVIEW_ACTIONS.contains(&action) {
        return Err(ApiError::ValidationError(format!(
            "action must be one of {}",
            REVIEW_ACTIONS.join(", ")
        )));
    }
    Ok(())
}

/// Parse an `owner/name` slug into its two parts
pub fn parse_repository_slug(slug: &str) -> ApiResult<(String, String)> {
    let parts: Vec<&str> = slug.split('/').collect();
    match parts.as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => {
            Ok(((*owner).to_string(), (*name).to_string()))
        }
        _ => Err(ApiError::ValidationError(format!(
            "repository must be in owner/name form, got: {}",
            slug
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty_valid() {
        assert!(validate_not_empty("hello", "name").is_ok());
    }

    #[test]
    fn test_validate_not_empty_empty() {
        assert!(validate_not_empty("", "name").is_err());
        assert!(validate_not_empty("   ", "name").is_err());
    }

    #[test]
    fn test_validate_string_length() {
        assert!(validate_string_length("hello", "name", 1, 10).is_ok());
        assert!(validate_string_length("hi", "name", 5, 10).is_err());
        assert!(validate_string_length("very long string", "name", 1, 5).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("invalid-uuid").is_err());
    }

    #[test]
    fn test_validate_review_action() {
        assert!(validate_review_action("APPROVE").is_ok());
        assert!(validate_review_action("REQUEST_CHANGES").is_ok());
        assert!(validate_review_action("COMMENT").is_ok());
        assert!(validate_review_action("approve").is_err());
        assert!(validate_review_action("MERGE").is_err());
    }

    #[test]
    fn test_parse_repository_slug() {
        assert_eq!(
            parse_repository_slug("octo/widgets").unwrap(),
            ("octo".to_string(), "widgets".to_string())
        );
        assert!(parse_repository_slug("octo").is_err());
        assert!(parse_repository_slug("octo/widgets/extra").is_err());
        assert!(parse_repository_slug("/widgets").is_err());
    }
}
