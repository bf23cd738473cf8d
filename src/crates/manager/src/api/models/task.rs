//! Task API models and DTOs

use serde::{Deserialize, Serialize};

use crate::api::models::repository::RepositoryResponse;
use crate::db::models::Task;
use crate::github::TaskSnapshot;
use crate::TaskStatus;

/// Task response for the API (flattened database model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: String,
    pub repository_id: String,
    pub issue_number: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub pr_number: Option<i64>,
    pub assigned_at: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl TaskResponse {
    /// Build an API response from a database task
    pub fn from_db(task: Task) -> Self {
        Self {
            status: task.task_status(),
            id: task.id,
            repository_id: task.repository_id,
            issue_number: task.issue_number,
            title: task.title,
            description: task.description,
            pr_number: task.pr_number,
            assigned_at: task.assigned_at,
            completed_at: task.completed_at,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Task detail: the stored row, its repository, convenience URLs, and the
/// live snapshot fetched from GitHub
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDetailResponse {
    pub task: TaskResponse,
    pub repository: RepositoryResponse,
    pub issue_url: String,
    pub pr_url: Option<String>,
    pub snapshot: TaskSnapshot,
}

/// Poll response for a task's current remote state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatusResponse {
    pub task_id: String,
    pub snapshot: TaskSnapshot,
}
