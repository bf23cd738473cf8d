//! Review model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A review decision recorded against a task's pull request
///
/// Rows are immutable after creation; each submitted review inserts a new
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier (UUID string)
    pub id: String,

    /// Task the review belongs to
    pub task_id: String,

    /// Pull request number the review was submitted against
    pub pr_number: i64,

    /// Review action: APPROVE, REQUEST_CHANGES, or COMMENT
    pub action: String,

    /// Free-text review comment
    pub comment: Option<String>,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,
}

/// Review actions accepted by the GitHub reviews endpoint
pub const REVIEW_ACTIONS: &[&str] = &["APPROVE", "REQUEST_CHANGES", "COMMENT"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions() {
        assert!(REVIEW_ACTIONS.contains(&"APPROVE"));
        assert!(REVIEW_ACTIONS.contains(&"REQUEST_CHANGES"));
        assert!(REVIEW_ACTIONS.contains(&"COMMENT"));
        assert_eq!(REVIEW_ACTIONS.len(), 3);
    }

    #[test]
    fn test_review_serializes() {
        let review = Review {
            id: "rev-1".to_string(),
            task_id: "task-1".to_string(),
            pr_number: 12,
            action: "APPROVE".to_string(),
            comment: Some("LGTM".to_string()),
            created_at: "2024-05-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["action"], "APPROVE");
        assert_eq!(json["pr_number"], 12);
    }
}
