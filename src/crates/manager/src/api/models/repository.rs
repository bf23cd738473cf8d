//! Repository API models and DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::models::task::TaskResponse;
use crate::db::models::Repository;
use crate::github::Issue;

/// Request to start tracking a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRepositoryRequest {
    /// Repository owner login
    pub owner: String,

    /// Repository name
    pub name: String,
}

impl AddRepositoryRequest {
    /// Validate the add request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_not_empty(&self.owner, "owner")?;
        crate::api::middleware::validation::validate_not_empty(&self.name, "name")?;
        crate::api::middleware::validation::validate_string_length(&self.owner, "owner", 1, 100)?;
        crate::api::middleware::validation::validate_string_length(&self.name, "name", 1, 100)?;
        Ok(())
    }
}

/// Repository response for the API (flattened database model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryResponse {
    pub id: String,
    pub owner: String,
    pub name: String,
    pub full_name: String,
    pub github_url: String,
    pub description: Option<String>,
    pub private: bool,
    pub agent_enabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl RepositoryResponse {
    /// Build an API response from a database repository
    pub fn from_db(repo: Repository) -> Self {
        Self {
            full_name: repo.full_name(),
            github_url: repo.github_url(),
            id: repo.id,
            owner: repo.owner,
            name: repo.name,
            description: repo.description,
            private: repo.private != 0,
            agent_enabled: repo.agent_enabled != 0,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}

/// Remote issues for a tracked repository plus the tasks already created
/// for them, keyed by issue number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryIssuesResponse {
    pub repository: RepositoryResponse,
    pub issues: Vec<Issue>,
    pub tasks_by_issue: BTreeMap<i64, TaskResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_validation() {
        let ok = AddRepositoryRequest {
            owner: "octo".to_string(),
            name: "widgets".to_string(),
        };
        assert!(ok.validate().is_ok());

        let missing = AddRepositoryRequest {
            owner: String::new(),
            name: "widgets".to_string(),
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_response_flattens_flags() {
        let repo = Repository {
            id: "repo-1".to_string(),
            owner: "octo".to_string(),
            name: "widgets".to_string(),
            description: Some("things".to_string()),
            private: 1,
            agent_enabled: 0,
            created_at: "2024-05-01T00:00:00Z".to_string(),
            updated_at: "2024-05-01T00:00:00Z".to_string(),
        };
        let resp = RepositoryResponse::from_db(repo);
        assert!(resp.private);
        assert!(!resp.agent_enabled);
        assert_eq!(resp.full_name, "octo/widgets");
    }
}
