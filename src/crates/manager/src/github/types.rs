//! GitHub API payload types
//!
//! Subsets of the REST API payloads, limited to the fields this service
//! reads. Unknown fields are ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::TaskStatus;

/// A GitHub issue (subset of fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    pub state: String,
    pub html_url: Option<String>,
    /// Pull requests also come through the issues endpoint; filter them out.
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// Whether this issues-API entry is actually a pull request
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Fields for creating a new issue
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// A GitHub pull request (subset of fields)
///
/// The list endpoint omits the `merged` boolean and only carries
/// `merged_at`, so merge state is derived from either field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    pub state: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub merged: bool,
    pub merged_at: Option<String>,
    pub html_url: Option<String>,
}

impl PullRequest {
    /// Whether the pull request is closed
    pub fn is_closed(&self) -> bool {
        self.state == "closed"
    }

    /// Whether the pull request was merged
    pub fn is_merged(&self) -> bool {
        self.merged || self.merged_at.is_some()
    }
}

/// A comment on an issue (subset of fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    pub user: CommentAuthor,
    pub body: Option<String>,
    pub created_at: String,
}

/// The author of an issue comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub login: String,
}

/// A file changed by a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    pub status: String,
    pub additions: i64,
    pub deletions: i64,
    pub patch: Option<String>,
}

/// A commit on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestCommit {
    pub sha: String,
    pub commit: CommitDetail,
}

/// Commit metadata nested inside a pull-request commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
}

/// A review submitted on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestReview {
    pub id: i64,
    pub state: String,
    pub body: Option<String>,
    pub user: Option<CommentAuthor>,
}

/// Full detail for a pull request: the PR plus files, commits, and reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetail {
    pub pull_request: PullRequest,
    pub files: Vec<PullRequestFile>,
    pub commits: Vec<PullRequestCommit>,
    pub reviews: Vec<PullRequestReview>,
}

/// Result of checking a repository and agent availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCheck {
    /// Whether the repository exists and is accessible
    pub exists: bool,
    /// Whether the coding agent appears in the assignable-actor list
    pub agent_enabled: bool,
    /// Bot node id of the agent, when present
    pub agent_id: Option<String>,
    pub description: Option<String>,
    pub private: bool,
    pub full_name: Option<String>,
    pub default_branch: Option<String>,
}

impl RepoCheck {
    /// A check result for a repository that does not exist
    pub fn absent() -> Self {
        Self {
            exists: false,
            agent_enabled: false,
            agent_id: None,
            description: None,
            private: false,
            full_name: None,
            default_branch: None,
        }
    }
}

/// A repository returned by the search endpoint (subset of fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRepository {
    pub full_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    pub html_url: Option<String>,
    pub stargazers_count: Option<i64>,
}

/// One observed comment by the agent on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentActivity {
    pub created_at: String,
    pub body: Option<String>,
}

/// Everything fetched to evaluate the current state of a delegated task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub issue: Issue,
    pub linked_pull_request: Option<PullRequest>,
    pub pr_number: Option<i64>,
    pub agent_activity: Vec<AgentActivity>,
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_pull_request_filter() {
        let issue: Issue = serde_json::from_str(
            r#"{"number": 7, "title": "Fix the build", "body": null, "state": "open",
                "html_url": "https://github.com/o/r/issues/7",
                "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/7"}}"#,
        )
        .unwrap();
        assert!(issue.is_pull_request());

        let plain: Issue = serde_json::from_str(
            r#"{"number": 8, "title": "A real issue", "body": "text", "state": "open",
                "html_url": null, "pull_request": null}"#,
        )
        .unwrap();
        assert!(!plain.is_pull_request());
    }

    #[test]
    fn test_pull_request_merged_from_merged_at() {
        // List responses omit `merged` and only carry `merged_at`.
        let pr: PullRequest = serde_json::from_str(
            r#"{"number": 12, "title": "Fix", "body": null, "state": "closed",
                "merged_at": "2024-05-01T00:00:00Z", "html_url": null}"#,
        )
        .unwrap();
        assert!(pr.is_closed());
        assert!(pr.is_merged());
        assert!(!pr.draft);
    }

    #[test]
    fn test_pull_request_not_merged() {
        let pr: PullRequest = serde_json::from_str(
            r#"{"number": 12, "title": "Fix", "body": null, "state": "closed",
                "merged_at": null, "html_url": null}"#,
        )
        .unwrap();
        assert!(!pr.is_merged());
    }

    #[test]
    fn test_new_issue_skips_absent_labels() {
        let issue = NewIssue {
            title: "t".to_string(),
            body: "b".to_string(),
            labels: None,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("labels").is_none());
    }
}
