//! Review endpoint handlers

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{ReviewResponse, SubmitReviewRequest, TaskReviewContext},
    response,
    routes::AppState,
};
use crate::db::repositories::{RepositoryRepository, ReviewRepository, TaskRepository};
use crate::TaskStatus;

/// List all recorded reviews, newest first
///
/// GET /api/v1/reviews
pub async fn list_reviews(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let reviews: Vec<_> = ReviewRepository::list(app_state.db.pool())
        .await?
        .into_iter()
        .map(ReviewResponse::from_db)
        .collect();
    Ok(response::ok(reviews))
}

/// Review context for a task: live pull-request detail (files, commits,
/// reviews) plus the decisions already recorded locally
///
/// GET /api/v1/tasks/:id/review
///
/// A task without a linked pull request has nothing to review yet.
pub async fn get_task_review(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let task = TaskRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {}", id)))?;
    let pr_number = task.pr_number.ok_or_else(|| {
        ApiError::ValidationError(format!("task {} has no linked pull request", id))
    })?;
    let repo = RepositoryRepository::get_by_id(pool, &task.repository_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("repository {}", task.repository_id)))?;

    let detail = app_state
        .github
        .get_pull_request_detail(&repo.owner, &repo.name, pr_number)
        .await?;
    let recorded_reviews = ReviewRepository::list_by_task(pool, &id)
        .await?
        .into_iter()
        .map(ReviewResponse::from_db)
        .collect();

    Ok(response::ok(TaskReviewContext {
        task_id: task.id,
        pr_number,
        detail,
        recorded_reviews,
    }))
}

/// Submit a review on a task's linked pull request and record the decision
///
/// POST /api/v1/tasks/:id/review
///
/// The review is submitted to GitHub first; only a successful submission is
/// recorded locally. APPROVE and REQUEST_CHANGES also move the task status;
/// COMMENT leaves it untouched.
pub async fn submit_review(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SubmitReviewRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    let task = TaskRepository::get_by_id(pool, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {}", id)))?;
    let pr_number = task
        .pr_number
        .ok_or_else(|| ApiError::BadRequest(format!("task {} has no linked pull request", id)))?;
    let repo = RepositoryRepository::get_by_id(pool, &task.repository_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("repository {}", task.repository_id)))?;

    let comment = req.comment.clone().unwrap_or_default();
    app_state
        .github
        .submit_review(&repo.owner, &repo.name, pr_number, &req.action, &comment)
        .await?;

    let review = ReviewRepository::create(
        pool,
        Uuid::new_v4().to_string(),
        task.id.clone(),
        pr_number,
        req.action.clone(),
        req.comment,
    )
    .await?;

    match req.action.as_str() {
        "APPROVE" => {
            TaskRepository::update_status(pool, &task.id, TaskStatus::Approved).await?;
        }
        "REQUEST_CHANGES" => {
            TaskRepository::update_status(pool, &task.id, TaskStatus::ChangesRequested).await?;
        }
        _ => {}
    }

    tracing::info!(
        "Recorded {} review for task {} (PR #{})",
        review.action,
        task.id,
        pr_number
    );
    Ok(response::created(ReviewResponse::from_db(review)))
}
