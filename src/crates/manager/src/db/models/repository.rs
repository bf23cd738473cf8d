//! Repository model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tracked GitHub repository
///
/// The (owner, name) pair is unique; deleting a repository cascades to its
/// tasks, reviews, and agent sessions.
///
/// # Timestamps
/// All timestamp fields are RFC3339 strings due to SQLite type limitations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Repository {
    /// Unique repository identifier (UUID string)
    pub id: String,

    /// Repository owner login
    pub owner: String,

    /// Repository name
    pub name: String,

    /// Optional repository description
    pub description: Option<String>,

    /// Whether the repository is private (0 = public, 1 = private)
    pub private: i32,

    /// Whether the coding agent can be assigned in this repository
    /// (0 = disabled, 1 = enabled)
    pub agent_enabled: i32,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Last update timestamp (RFC3339 string)
    pub updated_at: String,
}

impl Repository {
    /// The `owner/name` form of the repository
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Web URL of the repository
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> Repository {
        Repository {
            id: "repo-1".to_string(),
            owner: "octo".to_string(),
            name: "widgets".to_string(),
            description: None,
            private: 0,
            agent_enabled: 1,
            created_at: "2024-05-01T00:00:00Z".to_string(),
            updated_at: "2024-05-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(repo().full_name(), "octo/widgets");
    }

    #[test]
    fn test_github_url() {
        assert_eq!(repo().github_url(), "https://github.com/octo/widgets");
    }
}
