//! Review API models and DTOs

use serde::{Deserialize, Serialize};

use crate::db::models::Review;
use crate::github::PullRequestDetail;

/// Request to submit a review for a task's pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    /// Review action: APPROVE, REQUEST_CHANGES, or COMMENT
    pub action: String,

    /// Free-text review comment
    #[serde(default)]
    pub comment: Option<String>,
}

impl SubmitReviewRequest {
    /// Validate the review request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_review_action(&self.action)
    }
}

/// Review response for the API (flattened database model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: String,
    pub task_id: String,
    pub pr_number: i64,
    pub action: String,
    pub comment: Option<String>,
    pub created_at: String,
}

impl ReviewResponse {
    /// Build an API response from a database review
    pub fn from_db(review: Review) -> Self {
        Self {
            id: review.id,
            task_id: review.task_id,
            pr_number: review.pr_number,
            action: review.action,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

/// Everything a reviewer needs for a task's pull request: the live PR
/// detail plus the decisions already recorded locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReviewContext {
    pub task_id: String,
    pub pr_number: i64,
    pub detail: PullRequestDetail,
    pub recorded_reviews: Vec<ReviewResponse>,
}
