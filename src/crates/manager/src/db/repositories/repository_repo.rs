//! Repository records: database operations

use chrono::Utc;

use crate::db::connection::DatabasePool;
use crate::db::models::Repository;

/// Data access for tracked repositories
pub struct RepositoryRepository;

impl RepositoryRepository {
    /// Insert a new repository record
    ///
    /// The (owner, name) pair is unique; inserting a duplicate fails with a
    /// constraint violation and creates no row.
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `id` - Unique repository identifier
    /// * `owner` - Repository owner login
    /// * `name` - Repository name
    /// * `description` - Optional description from the remote API
    /// * `private` - Repository visibility
    /// * `agent_enabled` - Whether the coding agent is available
    pub async fn create(
        pool: &DatabasePool,
        id: String,
        owner: String,
        name: String,
        description: Option<String>,
        private: bool,
        agent_enabled: bool,
    ) -> Result<Repository, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Repository>(
            "INSERT INTO repositories (id, owner, name, description, private, agent_enabled, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&id)
        .bind(&owner)
        .bind(&name)
        .bind(&description)
        .bind(private as i32)
        .bind(agent_enabled as i32)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Get a repository by ID
    pub async fn get_by_id(
        pool: &DatabasePool,
        id: &str,
    ) -> Result<Option<Repository>, sqlx::Error> {
        sqlx::query_as::<_, Repository>("SELECT * FROM repositories WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get a repository by its (owner, name) pair
    pub async fn get_by_owner_name(
        pool: &DatabasePool,
        owner: &str,
        name: &str,
    ) -> Result<Option<Repository>, sqlx::Error> {
        sqlx::query_as::<_, Repository>("SELECT * FROM repositories WHERE owner = ? AND name = ?")
            .bind(owner)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all repositories, newest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Repository>, sqlx::Error> {
        sqlx::query_as::<_, Repository>("SELECT * FROM repositories ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// Delete a repository; cascades to its tasks, reviews, and sessions
    ///
    /// # Returns
    /// True when a row was deleted
    pub async fn delete(pool: &DatabasePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM repositories WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all repositories
    pub async fn count(pool: &DatabasePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM repositories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
