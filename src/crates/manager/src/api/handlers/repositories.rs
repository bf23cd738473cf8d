//! Repository endpoint handlers

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{AddRepositoryRequest, RepositoryIssuesResponse, RepositoryResponse, TaskResponse},
    response,
    routes::AppState,
};
use crate::db::repositories::{RepositoryRepository, TaskRepository};

/// Query parameters for repository search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub per_page: Option<u32>,
}

/// List all tracked repositories
///
/// GET /api/v1/repositories
pub async fn list_repositories(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let repositories: Vec<_> = RepositoryRepository::list(app_state.db.pool())
        .await?
        .into_iter()
        .map(RepositoryResponse::from_db)
        .collect();
    Ok(response::ok(repositories))
}

/// Start tracking a repository
///
/// POST /api/v1/repositories
///
/// The repository is verified against GitHub before it is persisted: a slug
/// that does not resolve remotely is rejected, and agent availability is
/// recorded from the assignable-actor check. Tracking the same repository
/// twice is a conflict.
pub async fn add_repository(
    State(app_state): State<AppState>,
    axum::Json(req): axum::Json<AddRepositoryRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    if RepositoryRepository::get_by_owner_name(pool, &req.owner, &req.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(format!(
            "repository {}/{} is already tracked",
            req.owner, req.name
        )));
    }

    let check = app_state
        .github
        .check_repository(&req.owner, &req.name)
        .await?;
    if !check.exists {
        return Err(ApiError::ValidationError(format!(
            "repository {}/{} not found on GitHub",
            req.owner, req.name
        )));
    }

    let created = RepositoryRepository::create(
        pool,
        Uuid::new_v4().to_string(),
        req.owner,
        req.name,
        check.description,
        check.private,
        check.agent_enabled,
    )
    .await?;

    tracing::info!(
        "Tracking repository {} (agent_enabled: {})",
        created.full_name(),
        created.agent_enabled != 0
    );
    Ok(response::created(RepositoryResponse::from_db(created)))
}

/// Get a tracked repository
///
/// GET /api/v1/repositories/:id
pub async fn get_repository(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let repo = RepositoryRepository::get_by_id(app_state.db.pool(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("repository {}", id)))?;
    Ok(response::ok(RepositoryResponse::from_db(repo)))
}

/// Stop tracking a repository; cascades to its tasks, reviews, and sessions
///
/// DELETE /api/v1/repositories/:id
pub async fn delete_repository(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let deleted = RepositoryRepository::delete(app_state.db.pool(), &id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("repository {}", id)));
    }
    tracing::info!("Deleted repository {}", id);
    Ok(response::no_content())
}

/// Search GitHub for repositories
///
/// GET /api/v1/repositories/search?q=
///
/// An empty query short-circuits to an empty result list.
pub async fn search_repositories(
    State(app_state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let q = query.q.trim();
    if q.is_empty() {
        return Ok(response::ok(Vec::<crate::github::SearchRepository>::new()));
    }
    let per_page = query.per_page.unwrap_or(10).min(50);
    let results = app_state.github.search_repositories(q, per_page).await?;
    Ok(response::ok(results))
}

/// List open issues for a tracked repository, joined against its tasks
///
/// GET /api/v1/repositories/:id/issues
pub async fn list_repository_issues(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let repo = RepositoryRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("repository {}", id)))?;

    let issues = app_state
        .github
        .list_issues(&repo.owner, &repo.name, "open")
        .await?;

    let tasks_by_issue: BTreeMap<i64, TaskResponse> = TaskRepository::list_by_repository(pool, &id)
        .await?
        .into_iter()
        .map(|t| (t.issue_number, TaskResponse::from_db(t)))
        .collect();

    Ok(response::ok(RepositoryIssuesResponse {
        repository: RepositoryResponse::from_db(repo),
        issues,
        tasks_by_issue,
    }))
}
