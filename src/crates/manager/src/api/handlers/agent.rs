//! Agent endpoint handlers
//!
//! Thin surface over the agent gateway plus a few idempotent helpers for
//! external tooling that drives the service (bootstrap, validate, session
//! tracking). Gateway outcomes carry a `simulated` flag so callers can tell
//! fabricated results from real ones.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::agent::DelegatedPullRequest;
use crate::api::{
    error::ApiResult,
    middleware::validation::parse_repository_slug,
    models::{
        AssignAgentRequest, BootstrapRequest, BootstrapResponse, CreateAndAssignRequest,
        CreateAndAssignResponse, CreatePullRequestRequest, SessionTrackResponse, TaskResponse,
        ValidateQuery, ValidateResponse,
    },
    response,
    routes::AppState,
};
use crate::db::repositories::{RepositoryRepository, SessionRepository, TaskRepository};
use crate::github::NewIssue;
use crate::TaskStatus;

/// Hand an issue to the coding agent by repository slug
///
/// POST /api/v1/agent/assign
///
/// Works for untracked repositories too; when the repository and task are
/// known locally the task row is moved to `assigned` and a session is
/// recorded.
pub async fn assign(
    State(app_state): State<AppState>,
    Json(req): Json<AssignAgentRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let outcome = app_state
        .agent
        .assign_issue(&req.owner, &req.repo, req.issue_number)
        .await?;

    let pool = app_state.db.pool();
    let mut task = None;
    if let Some(repo) = RepositoryRepository::get_by_owner_name(pool, &req.owner, &req.repo).await?
    {
        if let Some(existing) =
            TaskRepository::get_by_repo_issue(pool, &repo.id, req.issue_number).await?
        {
            TaskRepository::update_status(pool, &existing.id, TaskStatus::Assigned).await?;
            SessionRepository::create(
                pool,
                Uuid::new_v4().to_string(),
                existing.id.clone(),
                Some(outcome.session_id.clone()),
            )
            .await?;
            task = TaskRepository::get_by_id(pool, &existing.id)
                .await?
                .map(TaskResponse::from_db);
        }
    }

    Ok(response::ok(serde_json::json!({
        "assignment": outcome,
        "task": task,
    })))
}

/// Create an issue and delegate it to the agent in one step
///
/// POST /api/v1/agent/create-and-assign
pub async fn create_and_assign(
    State(app_state): State<AppState>,
    Json(req): Json<CreateAndAssignRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;
    let (owner, name) = parse_repository_slug(&req.repository)?;

    let issue = app_state
        .github
        .create_issue(
            &owner,
            &name,
            &NewIssue {
                title: req.title.clone(),
                body: req.description.clone().unwrap_or_default(),
                labels: None,
            },
        )
        .await?;

    let assignment = app_state
        .agent
        .assign_issue(&owner, &name, issue.number)
        .await?;

    let pool = app_state.db.pool();
    let mut task = None;
    if let Some(repo) = RepositoryRepository::get_by_owner_name(pool, &owner, &name).await? {
        let created = TaskRepository::create(
            pool,
            Uuid::new_v4().to_string(),
            repo.id.clone(),
            issue.number,
            req.title,
            req.description,
            TaskStatus::Assigned,
            Some(Utc::now().to_rfc3339()),
        )
        .await?;
        SessionRepository::create(
            pool,
            Uuid::new_v4().to_string(),
            created.id.clone(),
            Some(assignment.session_id.clone()),
        )
        .await?;
        task = Some(TaskResponse::from_db(created));
    }

    Ok(response::created(CreateAndAssignResponse {
        issue_number: issue.number,
        issue_url: issue.html_url,
        assignment,
        task,
    }))
}

/// Ask the agent to open a pull request for a problem statement
///
/// POST /api/v1/agent/create-pull-request
pub async fn create_pull_request(
    State(app_state): State<AppState>,
    Json(req): Json<CreatePullRequestRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let outcome = app_state
        .agent
        .create_pull_request(&DelegatedPullRequest {
            owner: req.owner,
            repo: req.repo,
            title: req.title,
            problem_statement: req.problem_statement,
            base_ref: req.base_ref,
        })
        .await?;

    Ok(response::ok(outcome))
}

/// Track an agent session by its external identifier
///
/// GET /api/v1/agent/sessions/:session_id
///
/// Unknown sessions are reported as `ready` at 0% rather than 404: the
/// integration may simply not have recorded the session yet.
pub async fn track_session(
    State(app_state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let session = SessionRepository::get_by_session_id(app_state.db.pool(), &session_id).await?;

    let response = match session {
        Some(session) => SessionTrackResponse {
            progress: progress_for(&session.status).to_string(),
            session_id,
            status: session.status,
            logs: session.logs,
            last_updated: session.updated_at,
        },
        None => SessionTrackResponse {
            session_id,
            status: "ready".to_string(),
            progress: "0%".to_string(),
            logs: None,
            last_updated: Utc::now().to_rfc3339(),
        },
    };

    Ok(response::ok(response))
}

fn progress_for(status: &str) -> &'static str {
    match status {
        "started" => "10%",
        "running" => "50%",
        "completed" | "failed" => "100%",
        _ => "0%",
    }
}

/// Idempotently seed local rows for an externally assigned issue
///
/// POST /api/v1/agent/bootstrap
///
/// Creates the repository and task rows when missing so external tooling
/// can register work it started out of band. No remote calls are made.
pub async fn bootstrap(
    State(app_state): State<AppState>,
    Json(req): Json<BootstrapRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    let (repo, repository_created) =
        match RepositoryRepository::get_by_owner_name(pool, &req.owner, &req.repo).await? {
            Some(existing) => (existing, false),
            None => {
                let created = RepositoryRepository::create(
                    pool,
                    Uuid::new_v4().to_string(),
                    req.owner.clone(),
                    req.repo.clone(),
                    None,
                    false,
                    false,
                )
                .await?;
                (created, true)
            }
        };

    let (task, task_created) =
        match TaskRepository::get_by_repo_issue(pool, &repo.id, req.issue_number).await? {
            Some(existing) => (existing, false),
            None => {
                let created = TaskRepository::create(
                    pool,
                    Uuid::new_v4().to_string(),
                    repo.id.clone(),
                    req.issue_number,
                    req.title,
                    req.description,
                    TaskStatus::Assigned,
                    Some(Utc::now().to_rfc3339()),
                )
                .await?;
                (created, true)
            }
        };

    Ok(response::ok(BootstrapResponse {
        repository_created,
        repository_id: repo.id,
        task_created,
        task_id: task.id,
    }))
}

/// Check whether a repository and task are known locally
///
/// GET /api/v1/agent/validate?owner=&name=&issue_number=
pub async fn validate(
    State(app_state): State<AppState>,
    Query(query): Query<ValidateQuery>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let repo = RepositoryRepository::get_by_owner_name(pool, &query.owner, &query.name).await?;

    let task = match &repo {
        Some(repo) => TaskRepository::get_by_repo_issue(pool, &repo.id, query.issue_number).await?,
        None => None,
    };

    Ok(response::ok(ValidateResponse {
        repository_exists: repo.is_some(),
        repository_id: repo.map(|r| r.id),
        task_exists: task.is_some(),
        integration_ready: task.is_some(),
        task_status: task.as_ref().map(|t| t.status.clone()),
        task_id: task.map(|t| t.id),
    }))
}
