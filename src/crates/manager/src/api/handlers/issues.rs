//! Issue endpoint handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{CreateIssueRequest, CreateIssueResponse, TaskResponse},
    response,
    routes::AppState,
};
use crate::db::models::Repository;
use crate::db::repositories::{RepositoryRepository, SessionRepository, TaskRepository};
use crate::github::NewIssue;
use crate::TaskStatus;

/// Create an issue in a tracked repository, optionally handing it straight
/// to the coding agent
///
/// POST /api/v1/issues
///
/// Issue creation and delegation are separate steps: when delegation fails,
/// the created issue is still returned with the failure recorded in
/// `assignment_error` rather than the whole request erroring out.
pub async fn create_issue(
    State(app_state): State<AppState>,
    Json(req): Json<CreateIssueRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    let repo = RepositoryRepository::get_by_id(pool, &req.repository_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("repository {}", req.repository_id)))?;

    let issue = app_state
        .github
        .create_issue(
            &repo.owner,
            &repo.name,
            &NewIssue {
                title: req.title.clone(),
                body: req.body.clone().unwrap_or_default(),
                labels: None,
            },
        )
        .await?;

    if !req.assign_to_agent {
        return Ok(response::created(CreateIssueResponse {
            issue,
            task: None,
            assignment: None,
            assignment_error: None,
        }));
    }

    match app_state
        .agent
        .assign_issue(&repo.owner, &repo.name, issue.number)
        .await
    {
        Ok(assignment) => {
            let task = record_assigned_task(
                &app_state,
                &repo,
                issue.number,
                req.title,
                req.body,
                Some(&assignment.session_id),
            )
            .await?;
            Ok(response::created(CreateIssueResponse {
                issue,
                task: Some(TaskResponse::from_db(task)),
                assignment: Some(assignment),
                assignment_error: None,
            }))
        }
        Err(err) => {
            tracing::warn!(
                "Issue #{} created but delegation failed: {}",
                issue.number,
                err
            );
            Ok(response::created(CreateIssueResponse {
                issue,
                task: None,
                assignment: None,
                assignment_error: Some(err.to_string()),
            }))
        }
    }
}

/// Hand an existing issue to the coding agent
///
/// POST /api/v1/repositories/:id/issues/:number/assign
///
/// An issue that already has a task is a conflict; delegation is not
/// repeated.
pub async fn assign_issue(
    State(app_state): State<AppState>,
    Path((id, number)): Path<(String, i64)>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let repo = RepositoryRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("repository {}", id)))?;

    if TaskRepository::get_by_repo_issue(pool, &id, number)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(format!(
            "issue #{} in {} already has a task",
            number,
            repo.full_name()
        )));
    }

    let issue = app_state
        .github
        .get_issue(&repo.owner, &repo.name, number)
        .await?;

    let assignment = app_state
        .agent
        .assign_issue(&repo.owner, &repo.name, number)
        .await?;

    let task = record_assigned_task(
        &app_state,
        &repo,
        number,
        issue.title,
        issue.body,
        Some(&assignment.session_id),
    )
    .await?;

    Ok(response::ok(serde_json::json!({
        "task": TaskResponse::from_db(task),
        "assignment": assignment,
    })))
}

/// Insert the task row for a freshly assigned issue and record a session
///
/// The (repository, issue_number) uniqueness constraint catches races with
/// a concurrent assignment and surfaces as a conflict.
pub(crate) async fn record_assigned_task(
    app_state: &AppState,
    repo: &Repository,
    issue_number: i64,
    title: String,
    description: Option<String>,
    session_id: Option<&str>,
) -> ApiResult<crate::db::models::Task> {
    let pool = app_state.db.pool();

    let task = TaskRepository::create(
        pool,
        Uuid::new_v4().to_string(),
        repo.id.clone(),
        issue_number,
        title,
        description,
        TaskStatus::Assigned,
        Some(Utc::now().to_rfc3339()),
    )
    .await?;

    SessionRepository::create(
        pool,
        Uuid::new_v4().to_string(),
        task.id.clone(),
        session_id.map(str::to_string),
    )
    .await?;

    Ok(task)
}
