//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::agent::AgentGateway;
use crate::api::error::ApiErrorResponse;
use crate::api::handlers;
use crate::db::DatabaseConnection;
use crate::github::GitHubClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub github: Arc<GitHubClient>,
    pub agent: Arc<dyn AgentGateway>,
}

/// Build the complete API router
pub fn create_router(
    db: DatabaseConnection,
    github: Arc<GitHubClient>,
    agent: Arc<dyn AgentGateway>,
) -> Router {
    let app_state = AppState { db, github, agent };

    Router::new()
        // Health check endpoints
        .route("/health", get(handlers::health))
        .route("/api/v1/system/health", get(handlers::system_health))
        // Dashboard
        .route("/api/v1/dashboard", get(handlers::get_dashboard))
        // Repository endpoints
        .route(
            "/api/v1/repositories",
            get(handlers::list_repositories).post(handlers::add_repository),
        )
        .route(
            "/api/v1/repositories/search",
            get(handlers::search_repositories),
        )
        .route(
            "/api/v1/repositories/:id",
            get(handlers::get_repository).delete(handlers::delete_repository),
        )
        .route(
            "/api/v1/repositories/:id/issues",
            get(handlers::list_repository_issues),
        )
        .route(
            "/api/v1/repositories/:id/issues/:number/assign",
            post(handlers::assign_issue),
        )
        // Issue endpoints
        .route("/api/v1/issues", post(handlers::create_issue))
        // Task endpoints
        .route("/api/v1/tasks", get(handlers::list_tasks))
        .route("/api/v1/tasks/:id", get(handlers::get_task))
        .route("/api/v1/tasks/:id/status", get(handlers::get_task_status))
        .route(
            "/api/v1/tasks/:id/review",
            get(handlers::get_task_review).post(handlers::submit_review),
        )
        // Review endpoints
        .route("/api/v1/reviews", get(handlers::list_reviews))
        // Agent endpoints
        .route("/api/v1/agent/assign", post(handlers::agent::assign))
        .route(
            "/api/v1/agent/create-and-assign",
            post(handlers::agent::create_and_assign),
        )
        .route(
            "/api/v1/agent/create-pull-request",
            post(handlers::agent::create_pull_request),
        )
        .route(
            "/api/v1/agent/sessions/:session_id",
            get(handlers::agent::track_session),
        )
        .route("/api/v1/agent/bootstrap", post(handlers::agent::bootstrap))
        .route("/api/v1/agent/validate", get(handlers::agent::validate))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// JSON 404 for unmatched routes
async fn not_found() -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse::new(
            "NotFound",
            "The requested route does not exist",
            "NOT_FOUND",
        )),
    )
}
