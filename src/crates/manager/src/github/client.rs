//! GitHub API client
//!
//! Thin typed wrapper over the GitHub REST and GraphQL endpoints. The
//! client is stateless beyond its configuration: credentials are passed in
//! explicitly at construction and every call makes exactly one attempt,
//! propagating failures as [`GitHubError`]. No rate-limit handling, no
//! pagination beyond the first page, no caching.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::status::{find_linked_pull_request, resolve_status};
use crate::github::types::{
    AgentActivity, Issue, IssueComment, NewIssue, PullRequest, PullRequestCommit,
    PullRequestDetail, PullRequestFile, PullRequestReview, RepoCheck, SearchRepository,
    TaskSnapshot,
};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const DEFAULT_AGENT_LOGIN: &str = "copilot-swe-agent";
const DEFAULT_USER_AGENT: &str = "agent-task-manager/0.1";

const SUGGESTED_ACTORS_QUERY: &str = r#"
query($owner: String!, $name: String!) {
    repository(owner: $owner, name: $name) {
        suggestedActors(capabilities: [CAN_BE_ASSIGNED], first: 100) {
            nodes {
                login
                __typename
                ... on Bot {
                    id
                }
            }
        }
    }
}
"#;

/// Explicit configuration for the GitHub client
///
/// Base URLs are overridable so tests and self-hosted deployments can point
/// the client elsewhere.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Access token for the remote API
    pub token: String,
    /// REST API base URL
    pub api_base: String,
    /// GraphQL endpoint URL
    pub graphql_url: String,
    /// Login of the coding agent bot account
    pub agent_login: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl GitHubConfig {
    /// Create a configuration with default endpoints and agent login
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            agent_login: DEFAULT_AGENT_LOGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Typed GitHub API client
pub struct GitHubClient {
    http: reqwest::Client,
    config: GitHubConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    items: Vec<SearchRepository>,
}

impl GitHubClient {
    /// Create a new client from an explicit configuration
    pub fn new(config: GitHubConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Login of the configured coding agent account
    pub fn agent_login(&self) -> &str {
        &self.config.agent_login
    }

    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Convert a non-2xx response into a `Status` error
    async fn error_for_status(response: reqwest::Response) -> GitHubResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> GitHubResult<T> {
        let response = self
            .http
            .get(self.rest_url(path))
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", &self.config.user_agent)
            .query(query)
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let response = self
            .http
            .post(self.rest_url(path))
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", &self.config.user_agent)
            .json(body)
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Execute a GraphQL query, unwrapping the `data` field
    async fn graphql(&self, query: &str, variables: Value) -> GitHubResult<Value> {
        let response = self
            .http
            .post(&self.config.graphql_url)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.config.user_agent)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;
        let body: Value = response.json().await?;

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.get("message")
                            .and_then(Value::as_str)
                            .unwrap_or("unknown error")
                            .to_string()
                    })
                    .collect();
                return Err(GitHubError::GraphQl(messages));
            }
        }

        body.get("data")
            .cloned()
            .ok_or_else(|| GitHubError::Decode("GraphQL response missing data field".to_string()))
    }

    /// Check that a repository exists and whether the coding agent is
    /// available for assignment in it
    ///
    /// A 404 from the repository lookup yields `exists: false`; other
    /// failures propagate. Agent availability is a GraphQL query for actors
    /// with the `CAN_BE_ASSIGNED` capability; the agent is enabled exactly
    /// when the configured bot login appears in that list.
    pub async fn check_repository(&self, owner: &str, name: &str) -> GitHubResult<RepoCheck> {
        let repo: Value = match self
            .get_json(&format!("repos/{}/{}", owner, name), &[])
            .await
        {
            Ok(value) => value,
            Err(err) if err.is_not_found() => return Ok(RepoCheck::absent()),
            Err(err) => return Err(err),
        };

        let data = self
            .graphql(
                SUGGESTED_ACTORS_QUERY,
                json!({ "owner": owner, "name": name }),
            )
            .await?;
        let (agent_enabled, agent_id) = scan_suggested_actors(&data, &self.config.agent_login);

        Ok(RepoCheck {
            exists: true,
            agent_enabled,
            agent_id,
            description: repo
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            private: repo.get("private").and_then(Value::as_bool).unwrap_or(false),
            full_name: repo
                .get("full_name")
                .and_then(Value::as_str)
                .map(str::to_string),
            default_branch: repo
                .get("default_branch")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    /// List issues for a repository (one page, most recently updated first)
    ///
    /// Pull requests surface through the issues endpoint as well and are
    /// filtered out here.
    pub async fn list_issues(
        &self,
        owner: &str,
        name: &str,
        state: &str,
    ) -> GitHubResult<Vec<Issue>> {
        let issues: Vec<Issue> = self
            .get_json(
                &format!("repos/{}/{}/issues", owner, name),
                &[
                    ("state", state),
                    ("per_page", "50"),
                    ("sort", "updated"),
                    ("direction", "desc"),
                ],
            )
            .await?;
        Ok(issues.into_iter().filter(|i| !i.is_pull_request()).collect())
    }

    /// Fetch a single issue
    pub async fn get_issue(&self, owner: &str, name: &str, number: i64) -> GitHubResult<Issue> {
        self.get_json(&format!("repos/{}/{}/issues/{}", owner, name, number), &[])
            .await
    }

    /// Create a new issue
    pub async fn create_issue(
        &self,
        owner: &str,
        name: &str,
        issue: &NewIssue,
    ) -> GitHubResult<Issue> {
        let created: Issue = self
            .post_json(&format!("repos/{}/{}/issues", owner, name), issue)
            .await?;
        tracing::info!("Created issue #{} in {}/{}", created.number, owner, name);
        Ok(created)
    }

    /// Add an assignee to an issue
    pub async fn assign_issue(
        &self,
        owner: &str,
        name: &str,
        number: i64,
        assignee: &str,
    ) -> GitHubResult<Issue> {
        self.post_json(
            &format!("repos/{}/{}/issues/{}/assignees", owner, name, number),
            &json!({ "assignees": [assignee] }),
        )
        .await
    }

    /// List pull requests across all states (one page, updated-descending)
    pub async fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
    ) -> GitHubResult<Vec<PullRequest>> {
        self.get_json(
            &format!("repos/{}/{}/pulls", owner, name),
            &[("state", "all"), ("sort", "updated"), ("direction", "desc")],
        )
        .await
    }

    /// List comments on an issue
    pub async fn list_issue_comments(
        &self,
        owner: &str,
        name: &str,
        number: i64,
    ) -> GitHubResult<Vec<IssueComment>> {
        self.get_json(
            &format!("repos/{}/{}/issues/{}/comments", owner, name, number),
            &[],
        )
        .await
    }

    /// Fetch full detail for a pull request: the PR itself plus its files,
    /// commits, and reviews (four sequential calls)
    pub async fn get_pull_request_detail(
        &self,
        owner: &str,
        name: &str,
        number: i64,
    ) -> GitHubResult<PullRequestDetail> {
        let base = format!("repos/{}/{}/pulls/{}", owner, name, number);
        let pull_request: PullRequest = self.get_json(&base, &[]).await?;
        let files: Vec<PullRequestFile> = self.get_json(&format!("{}/files", base), &[]).await?;
        let commits: Vec<PullRequestCommit> =
            self.get_json(&format!("{}/commits", base), &[]).await?;
        let reviews: Vec<PullRequestReview> =
            self.get_json(&format!("{}/reviews", base), &[]).await?;

        Ok(PullRequestDetail {
            pull_request,
            files,
            commits,
            reviews,
        })
    }

    /// Submit a review on a pull request
    ///
    /// `event` is one of `APPROVE`, `REQUEST_CHANGES`, `COMMENT`.
    pub async fn submit_review(
        &self,
        owner: &str,
        name: &str,
        number: i64,
        event: &str,
        body: &str,
    ) -> GitHubResult<PullRequestReview> {
        let review: PullRequestReview = self
            .post_json(
                &format!("repos/{}/{}/pulls/{}/reviews", owner, name, number),
                &json!({ "event": event, "body": body }),
            )
            .await?;
        tracing::info!(
            "Submitted {} review for PR #{} in {}/{}",
            event,
            number,
            owner,
            name
        );
        Ok(review)
    }

    /// Search repositories, sorted by stars descending
    pub async fn search_repositories(
        &self,
        query: &str,
        per_page: u32,
    ) -> GitHubResult<Vec<SearchRepository>> {
        let per_page = per_page.to_string();
        let results: SearchResults = self
            .get_json(
                "search/repositories",
                &[
                    ("q", query),
                    ("per_page", per_page.as_str()),
                    ("sort", "stars"),
                    ("order", "desc"),
                ],
            )
            .await?;
        Ok(results.items)
    }

    /// Fetch everything needed to evaluate a delegated task and resolve its
    /// current lifecycle status
    ///
    /// Combines the issue, the first page of pull requests (for link
    /// detection), and the issue comments authored by the configured agent
    /// account.
    pub async fn fetch_task_snapshot(
        &self,
        owner: &str,
        name: &str,
        issue_number: i64,
    ) -> GitHubResult<TaskSnapshot> {
        let issue = self.get_issue(owner, name, issue_number).await?;
        let pulls = self.list_pull_requests(owner, name).await?;
        let linked = find_linked_pull_request(issue_number, &pulls).cloned();

        let comments = self.list_issue_comments(owner, name, issue_number).await?;
        let agent_activity: Vec<AgentActivity> = comments
            .into_iter()
            .filter(|c| c.user.login == self.config.agent_login)
            .map(|c| AgentActivity {
                created_at: c.created_at,
                body: c.body,
            })
            .collect();

        let status = resolve_status(linked.as_ref(), &agent_activity);
        let pr_number = linked.as_ref().map(|pr| pr.number);

        Ok(TaskSnapshot {
            issue,
            linked_pull_request: linked,
            pr_number,
            agent_activity,
            status,
        })
    }
}

/// Scan a `suggestedActors` GraphQL payload for the agent login
///
/// Returns whether the agent appears in the node list and its bot node id
/// when present.
fn scan_suggested_actors(data: &Value, agent_login: &str) -> (bool, Option<String>) {
    let nodes = data
        .get("repository")
        .and_then(|r| r.get("suggestedActors"))
        .and_then(|a| a.get("nodes"))
        .and_then(Value::as_array);

    if let Some(nodes) = nodes {
        for actor in nodes {
            if actor.get("login").and_then(Value::as_str) == Some(agent_login) {
                let id = actor
                    .get("id")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                return (true, id);
            }
        }
    }

    (false, None)
}
