//! Task model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::TaskStatus;

/// One unit of work delegated to the coding agent
///
/// Exactly one task exists per (repository, issue_number) pair. The status
/// column holds a [`TaskStatus`] label; it is mutated by the status
/// resolver and by review actions but is not enforced as a state machine.
///
/// # Timestamps
/// All timestamp fields are RFC3339 strings due to SQLite type limitations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier (UUID string)
    pub id: String,

    /// Owning repository id
    pub repository_id: String,

    /// GitHub issue number the task tracks
    pub issue_number: i64,

    /// Task title (usually the issue title)
    pub title: String,

    /// Optional task description (usually the issue body)
    pub description: Option<String>,

    /// Current lifecycle status label
    pub status: String,

    /// Linked pull request number, once one is detected
    pub pr_number: Option<i64>,

    /// When the issue was handed to the agent (RFC3339 string, optional)
    pub assigned_at: Option<String>,

    /// When the task finished (RFC3339 string, optional)
    pub completed_at: Option<String>,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Last update timestamp (RFC3339 string)
    pub updated_at: String,
}

impl Task {
    /// Parsed lifecycle status; falls back to `Created` for unknown labels
    pub fn task_status(&self) -> TaskStatus {
        TaskStatus::parse(&self.status).unwrap_or(TaskStatus::Created)
    }

    /// Web URL of the tracked issue
    pub fn issue_url(&self, repo_url: &str) -> String {
        format!("{}/issues/{}", repo_url, self.issue_number)
    }

    /// Web URL of the linked pull request, when one exists
    pub fn pr_url(&self, repo_url: &str) -> Option<String> {
        self.pr_number.map(|n| format!("{}/pull/{}", repo_url, n))
    }
}
