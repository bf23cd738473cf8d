//! Dashboard endpoint handler

use axum::extract::State;

use crate::api::{
    error::ApiResult,
    models::{DashboardResponse, ReviewResponse, TaskResponse},
    response,
    routes::AppState,
};
use crate::db::repositories::{RepositoryRepository, ReviewRepository, TaskRepository};

const RECENT_REVIEWS_LIMIT: i64 = 5;

/// Dashboard summary: active tasks, recent reviews, and totals
///
/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();

    let active_tasks = TaskRepository::list_active(pool)
        .await?
        .into_iter()
        .map(TaskResponse::from_db)
        .collect();
    let recent_reviews = ReviewRepository::list_recent(pool, RECENT_REVIEWS_LIMIT)
        .await?
        .into_iter()
        .map(ReviewResponse::from_db)
        .collect();
    let total_repositories = RepositoryRepository::count(pool).await?;
    let total_tasks = TaskRepository::count(pool).await?;

    Ok(response::ok(DashboardResponse {
        active_tasks,
        recent_reviews,
        total_repositories,
        total_tasks,
    }))
}
