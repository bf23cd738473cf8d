//! Simulated agent gateway
//!
//! Fabricates deterministic outcomes without performing any I/O. Useful
//! for local development and demos when no agent integration is reachable.
//! Every outcome is flagged `simulated: true`.

use async_trait::async_trait;
use chrono::Utc;

use crate::agent::gateway::{
    AgentGateway, AssignmentOutcome, CommentsOutcome, DelegatedPullRequest, PullRequestOutcome,
};
use crate::agent::IntegrationResult;

/// Placeholder PR number used by fabricated delegation outcomes
const SIMULATED_PR_NUMBER: i64 = 123;

/// Gateway that fabricates agent responses
#[derive(Debug, Default)]
pub struct SimulatedAgentGateway;

impl SimulatedAgentGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AgentGateway for SimulatedAgentGateway {
    async fn assign_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
    ) -> IntegrationResult<AssignmentOutcome> {
        tracing::info!(
            "Simulated agent assignment for {}/{}#{}",
            owner,
            repo,
            issue_number
        );
        Ok(AssignmentOutcome {
            repository: format!("{}/{}", owner, repo),
            issue_number,
            assigned: true,
            session_id: format!("agent-session-{}", issue_number),
            timestamp: Utc::now().to_rfc3339(),
            simulated: true,
        })
    }

    async fn create_pull_request(
        &self,
        request: &DelegatedPullRequest,
    ) -> IntegrationResult<PullRequestOutcome> {
        tracing::info!(
            "Simulated pull request delegation for {}/{}: {}",
            request.owner,
            request.repo,
            request.title
        );
        Ok(PullRequestOutcome {
            repository: format!("{}/{}", request.owner, request.repo),
            pr_number: SIMULATED_PR_NUMBER,
            title: request.title.clone(),
            pr_url: format!(
                "https://github.com/{}/{}/pull/{}",
                request.owner, request.repo, SIMULATED_PR_NUMBER
            ),
            simulated: true,
        })
    }

    async fn issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
    ) -> IntegrationResult<CommentsOutcome> {
        Ok(CommentsOutcome {
            repository: format!("{}/{}", owner, repo),
            issue_number,
            comments: Vec::new(),
            simulated: true,
        })
    }
}
