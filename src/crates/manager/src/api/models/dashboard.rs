//! Dashboard API models

use serde::{Deserialize, Serialize};

use crate::api::models::review::ReviewResponse;
use crate::api::models::task::TaskResponse;

/// Dashboard summary: active work, recent review decisions, and counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub active_tasks: Vec<TaskResponse>,
    pub recent_reviews: Vec<ReviewResponse>,
    pub total_repositories: i64,
    pub total_tasks: i64,
}
