//! Agent gateway trait and outcome types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::agent::IntegrationResult;
use crate::github::IssueComment;

/// Outcome of assigning an issue to the coding agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    pub repository: String,
    pub issue_number: i64,
    pub assigned: bool,
    /// Identifier for the agent's working session
    pub session_id: String,
    /// RFC3339 timestamp of the assignment
    pub timestamp: String,
    /// True when this outcome was fabricated rather than performed
    pub simulated: bool,
}

/// Request to delegate pull-request creation to the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegatedPullRequest {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub problem_statement: String,
    pub base_ref: Option<String>,
}

/// Outcome of delegating pull-request creation to the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestOutcome {
    pub repository: String,
    pub pr_number: i64,
    pub title: String,
    pub pr_url: String,
    /// True when this outcome was fabricated rather than performed
    pub simulated: bool,
}

/// Issue comments fetched through the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsOutcome {
    pub repository: String,
    pub issue_number: i64,
    pub comments: Vec<IssueComment>,
    /// True when this outcome was fabricated rather than performed
    pub simulated: bool,
}

/// Boundary to the external agent-assignment protocol
///
/// Exactly one implementation is chosen at startup from configuration;
/// callers never switch between live and simulated behavior per call.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Hand an issue to the coding agent
    async fn assign_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
    ) -> IntegrationResult<AssignmentOutcome>;

    /// Ask the agent to open a pull request for a problem statement
    async fn create_pull_request(
        &self,
        request: &DelegatedPullRequest,
    ) -> IntegrationResult<PullRequestOutcome>;

    /// Fetch the comments on an issue, as seen by the agent integration
    async fn issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
    ) -> IntegrationResult<CommentsOutcome>;
}
