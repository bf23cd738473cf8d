//! Health check endpoint handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::api::{response, routes::AppState};

/// Handler for GET /health
///
/// Returns basic liveness without touching the database.
pub async fn health() -> impl axum::response::IntoResponse {
    response::ok(json!({
        "status": "healthy",
        "service": "manager",
    }))
}

/// Handler for GET /api/v1/system/health
///
/// Returns detailed health including database connectivity and pool
/// statistics. An unreachable database yields 503.
pub async fn system_health(
    State(app_state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let stats = app_state.db.pool_statistics();
    let pool = json!({
        "idle_connections": stats.idle_connections,
        "active_connections": stats.active_connections,
        "total_connections": stats.total_connections,
        "collected_at": stats.collected_at,
    });

    match app_state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "healthy",
                    "database": "connected",
                    "pool": pool,
                }
            })),
        ),
        Err(err) => {
            tracing::error!("Database health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "data": {
                        "status": "unhealthy",
                        "database": "error",
                        "pool": pool,
                    }
                })),
            )
        }
    }
}
