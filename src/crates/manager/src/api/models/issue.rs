//! Issue API models and DTOs

use serde::{Deserialize, Serialize};

use crate::agent::AssignmentOutcome;
use crate::api::models::task::TaskResponse;
use crate::github::Issue;

/// Request to create a remote issue, optionally delegating it to the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssueRequest {
    /// Tracked repository the issue belongs to
    pub repository_id: String,

    /// Issue title
    pub title: String,

    /// Issue body
    #[serde(default)]
    pub body: Option<String>,

    /// Hand the issue to the coding agent immediately after creation
    #[serde(default)]
    pub assign_to_agent: bool,
}

impl CreateIssueRequest {
    /// Validate the create request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_not_empty(
            &self.repository_id,
            "repository_id",
        )?;
        crate::api::middleware::validation::validate_not_empty(&self.title, "title")?;
        crate::api::middleware::validation::validate_string_length(&self.title, "title", 1, 255)?;
        Ok(())
    }
}

/// Result of creating (and possibly delegating) an issue
///
/// When delegation was requested but failed, `issue` is still populated and
/// `assignment_error` explains the partial success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssueResponse {
    pub issue: Issue,
    pub task: Option<TaskResponse>,
    pub assignment: Option<AssignmentOutcome>,
    pub assignment_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_issue_request_defaults() {
        let req: CreateIssueRequest =
            serde_json::from_str(r#"{"repository_id": "repo-1", "title": "Fix it"}"#).unwrap();
        assert!(!req.assign_to_agent);
        assert!(req.body.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_issue_request_requires_title() {
        let req = CreateIssueRequest {
            repository_id: "repo-1".to_string(),
            title: String::new(),
            body: None,
            assign_to_agent: false,
        };
        assert!(req.validate().is_err());
    }
}
