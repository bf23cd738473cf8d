//! Task endpoint handlers
//!
//! Task detail and status polls fetch a live snapshot from GitHub and
//! reconcile the stored row against it: a newly discovered linked pull
//! request and terminal statuses are written back, while reviewer-set
//! labels (approved, changes_requested) are left alone otherwise.

use axum::extract::{Path, State};

use crate::api::{
    error::{ApiError, ApiResult},
    models::{RepositoryResponse, TaskDetailResponse, TaskResponse, TaskStatusResponse},
    response,
    routes::AppState,
};
use crate::db::models::{Repository, Task};
use crate::db::repositories::{RepositoryRepository, TaskRepository};
use crate::github::TaskSnapshot;
use crate::TaskStatus;

/// List all tasks, most recent assignment first
///
/// GET /api/v1/tasks
pub async fn list_tasks(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let tasks: Vec<_> = TaskRepository::list(app_state.db.pool())
        .await?
        .into_iter()
        .map(TaskResponse::from_db)
        .collect();
    Ok(response::ok(tasks))
}

/// Get a task with its repository and a live snapshot of the remote state
///
/// GET /api/v1/tasks/:id
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (task, repo) = load_task(&app_state, &id).await?;

    let snapshot = app_state
        .github
        .fetch_task_snapshot(&repo.owner, &repo.name, task.issue_number)
        .await?;
    let task = reconcile_task(&app_state, task, &snapshot).await?;

    let repo_url = repo.github_url();
    Ok(response::ok(TaskDetailResponse {
        issue_url: task.issue_url(&repo_url),
        pr_url: task.pr_url(&repo_url),
        task: TaskResponse::from_db(task),
        repository: RepositoryResponse::from_db(repo),
        snapshot,
    }))
}

/// Poll the current remote status of a task
///
/// GET /api/v1/tasks/:id/status
pub async fn get_task_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (task, repo) = load_task(&app_state, &id).await?;

    let snapshot = app_state
        .github
        .fetch_task_snapshot(&repo.owner, &repo.name, task.issue_number)
        .await?;
    let task = reconcile_task(&app_state, task, &snapshot).await?;

    Ok(response::ok(TaskStatusResponse {
        task_id: task.id,
        snapshot,
    }))
}

async fn load_task(app_state: &AppState, id: &str) -> ApiResult<(Task, Repository)> {
    let pool = app_state.db.pool();
    let task = TaskRepository::get_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {}", id)))?;
    let repo = RepositoryRepository::get_by_id(pool, &task.repository_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("repository {}", task.repository_id)))?;
    Ok((task, repo))
}

/// Write observed remote state back to the task row
async fn reconcile_task(
    app_state: &AppState,
    task: Task,
    snapshot: &TaskSnapshot,
) -> ApiResult<Task> {
    let pool = app_state.db.pool();
    let stored_status = task.task_status();
    let mut changed = false;

    if let Some(pr_number) = snapshot.pr_number {
        if task.pr_number != Some(pr_number) {
            TaskRepository::set_pull_request(pool, &task.id, pr_number, snapshot.status).await?;
            tracing::info!("Task {} linked to PR #{}", task.id, pr_number);
            changed = true;
        }
    }

    if !changed
        && matches!(snapshot.status, TaskStatus::Completed | TaskStatus::Failed)
        && stored_status != snapshot.status
    {
        TaskRepository::update_status(pool, &task.id, snapshot.status).await?;
        tracing::info!("Task {} moved to {}", task.id, snapshot.status);
        changed = true;
    }

    if !changed {
        return Ok(task);
    }
    TaskRepository::get_by_id(pool, &task.id)
        .await?
        .ok_or_else(|| ApiError::InternalError("task vanished during update".to_string()))
}
