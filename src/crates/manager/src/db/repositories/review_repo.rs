//! Review records: database operations

use chrono::Utc;

use crate::db::connection::DatabasePool;
use crate::db::models::Review;

/// Data access for recorded pull-request reviews
pub struct ReviewRepository;

impl ReviewRepository {
    /// Insert a review record; rows are immutable after creation
    pub async fn create(
        pool: &DatabasePool,
        id: String,
        task_id: String,
        pr_number: i64,
        action: String,
        comment: Option<String>,
    ) -> Result<Review, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, task_id, pr_number, action, comment, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&id)
        .bind(&task_id)
        .bind(pr_number)
        .bind(&action)
        .bind(&comment)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// List all reviews, newest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// List the most recent reviews
    pub async fn list_recent(pool: &DatabasePool, limit: i64) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC LIMIT ?")
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List reviews recorded for a task
    pub async fn list_by_task(
        pool: &DatabasePool,
        task_id: &str,
    ) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE task_id = ? ORDER BY created_at DESC",
        )
        .bind(task_id)
        .fetch_all(pool)
        .await
    }
}
