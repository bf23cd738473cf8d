//! Live agent gateway
//!
//! Performs real GitHub API calls: assignment adds the configured agent
//! login as an issue assignee, and comments come from the issues API.
//! Delegated pull-request creation has no plain REST equivalent, so the
//! live gateway refuses it with an explicit error instead of fabricating a
//! response.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::agent::gateway::{
    AgentGateway, AssignmentOutcome, CommentsOutcome, DelegatedPullRequest, PullRequestOutcome,
};
use crate::agent::{IntegrationError, IntegrationResult};
use crate::github::GitHubClient;

/// Gateway backed by the real GitHub API
pub struct LiveAgentGateway {
    client: Arc<GitHubClient>,
}

impl LiveAgentGateway {
    pub fn new(client: Arc<GitHubClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgentGateway for LiveAgentGateway {
    async fn assign_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
    ) -> IntegrationResult<AssignmentOutcome> {
        let check = self.client.check_repository(owner, repo).await?;
        if !check.agent_enabled {
            return Err(IntegrationError::AgentUnavailable(format!(
                "{}/{}",
                owner, repo
            )));
        }

        let agent_login = self.client.agent_login().to_string();
        self.client
            .assign_issue(owner, repo, issue_number, &agent_login)
            .await?;

        tracing::info!(
            "Assigned {} to {}/{}#{}",
            agent_login,
            owner,
            repo,
            issue_number
        );
        Ok(AssignmentOutcome {
            repository: format!("{}/{}", owner, repo),
            issue_number,
            assigned: true,
            session_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            simulated: false,
        })
    }

    async fn create_pull_request(
        &self,
        _request: &DelegatedPullRequest,
    ) -> IntegrationResult<PullRequestOutcome> {
        Err(IntegrationError::Unsupported(
            "delegated pull-request creation requires the remote agent endpoint".to_string(),
        ))
    }

    async fn issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
    ) -> IntegrationResult<CommentsOutcome> {
        let comments = self
            .client
            .list_issue_comments(owner, repo, issue_number)
            .await?;
        Ok(CommentsOutcome {
            repository: format!("{}/{}", owner, repo),
            issue_number,
            comments,
            simulated: false,
        })
    }
}
