//! Agent endpoint API models and DTOs

use serde::{Deserialize, Serialize};

use crate::agent::AssignmentOutcome;
use crate::api::models::task::TaskResponse;

/// Request to assign an issue to the coding agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignAgentRequest {
    pub owner: String,
    pub repo: String,
    pub issue_number: i64,
}

impl AssignAgentRequest {
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_not_empty(&self.owner, "owner")?;
        crate::api::middleware::validation::validate_not_empty(&self.repo, "repo")?;
        Ok(())
    }
}

/// Request to create a remote issue and delegate it in one step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAndAssignRequest {
    /// Repository in `owner/name` form
    pub repository: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateAndAssignRequest {
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_not_empty(&self.repository, "repository")?;
        crate::api::middleware::validation::validate_not_empty(&self.title, "title")?;
        crate::api::middleware::validation::validate_string_length(&self.title, "title", 1, 255)?;
        Ok(())
    }
}

/// Result of the create-and-assign flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAndAssignResponse {
    pub issue_number: i64,
    pub issue_url: Option<String>,
    pub assignment: AssignmentOutcome,
    pub task: Option<TaskResponse>,
}

/// Request to delegate pull-request creation to the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePullRequestRequest {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub problem_statement: String,
    #[serde(default)]
    pub base_ref: Option<String>,
}

impl CreatePullRequestRequest {
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_not_empty(&self.owner, "owner")?;
        crate::api::middleware::validation::validate_not_empty(&self.repo, "repo")?;
        crate::api::middleware::validation::validate_not_empty(&self.title, "title")?;
        crate::api::middleware::validation::validate_not_empty(
            &self.problem_statement,
            "problem_statement",
        )?;
        Ok(())
    }
}

/// Session tracking response
///
/// When no stored session matches, the endpoint reports a `ready` state
/// rather than failing: the session may simply not have been recorded yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTrackResponse {
    pub session_id: String,
    pub status: String,
    pub progress: String,
    pub logs: Option<String>,
    pub last_updated: String,
}

/// Request to idempotently seed a repository and task row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapRequest {
    pub owner: String,
    pub repo: String,
    pub issue_number: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl BootstrapRequest {
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_not_empty(&self.owner, "owner")?;
        crate::api::middleware::validation::validate_not_empty(&self.repo, "repo")?;
        crate::api::middleware::validation::validate_not_empty(&self.title, "title")?;
        Ok(())
    }
}

/// Result of the bootstrap helper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapResponse {
    pub repository_created: bool,
    pub repository_id: String,
    pub task_created: bool,
    pub task_id: String,
}

/// Query parameters for the validate helper
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateQuery {
    pub owner: String,
    pub name: String,
    pub issue_number: i64,
}

/// Result of the validate helper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub repository_exists: bool,
    pub repository_id: Option<String>,
    pub task_exists: bool,
    pub task_id: Option<String>,
    pub task_status: Option<String>,
    pub integration_ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_request_validation() {
        let ok = AssignAgentRequest {
            owner: "octo".to_string(),
            repo: "widgets".to_string(),
            issue_number: 7,
        };
        assert!(ok.validate().is_ok());

        let bad = AssignAgentRequest {
            owner: String::new(),
            repo: "widgets".to_string(),
            issue_number: 7,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_create_pull_request_request_validation() {
        let bad = CreatePullRequestRequest {
            owner: "octo".to_string(),
            repo: "widgets".to_string(),
            title: "Add parser".to_string(),
            problem_statement: String::new(),
            base_ref: None,
        };
        assert!(bad.validate().is_err());
    }
}
