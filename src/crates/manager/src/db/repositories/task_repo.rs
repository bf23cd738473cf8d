//! Task records: database operations

use chrono::Utc;

use crate::db::connection::DatabasePool;
use crate::db::models::Task;
use crate::TaskStatus;

/// Data access for delegated tasks
pub struct TaskRepository;

impl TaskRepository {
    /// Insert a new task record
    ///
    /// The (repository_id, issue_number) pair is unique; inserting a
    /// duplicate fails with a constraint violation and creates no row.
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `id` - Unique task identifier
    /// * `repository_id` - Owning repository id
    /// * `issue_number` - GitHub issue number
    /// * `title` - Task title
    /// * `description` - Optional description
    /// * `status` - Initial lifecycle status
    /// * `assigned_at` - Assignment timestamp, when already assigned
    pub async fn create(
        pool: &DatabasePool,
        id: String,
        repository_id: String,
        issue_number: i64,
        title: String,
        description: Option<String>,
        status: TaskStatus,
        assigned_at: Option<String>,
    ) -> Result<Task, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, repository_id, issue_number, title, description, status, assigned_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&id)
        .bind(&repository_id)
        .bind(issue_number)
        .bind(&title)
        .bind(&description)
        .bind(status.as_str())
        .bind(&assigned_at)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Get a task by ID
    pub async fn get_by_id(pool: &DatabasePool, id: &str) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get the task for a (repository, issue_number) pair
    pub async fn get_by_repo_issue(
        pool: &DatabasePool,
        repository_id: &str,
        issue_number: i64,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE repository_id = ? AND issue_number = ?",
        )
        .bind(repository_id)
        .bind(issue_number)
        .fetch_optional(pool)
        .await
    }

    /// List all tasks, most recent assignment first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks ORDER BY COALESCE(assigned_at, created_at) DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// List tasks belonging to a repository
    pub async fn list_by_repository(
        pool: &DatabasePool,
        repository_id: &str,
    ) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE repository_id = ? ORDER BY created_at DESC",
        )
        .bind(repository_id)
        .fetch_all(pool)
        .await
    }

    /// List tasks currently active on the dashboard (assigned or in progress)
    pub async fn list_active(pool: &DatabasePool) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE status IN ('assigned', 'in_progress')
             ORDER BY COALESCE(assigned_at, created_at) DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a task's status label
    pub async fn update_status(
        pool: &DatabasePool,
        id: &str,
        status: TaskStatus,
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        let completed_at = matches!(status, TaskStatus::Completed | TaskStatus::Failed)
            .then(|| now.clone());
        sqlx::query(
            "UPDATE tasks SET status = ?, completed_at = COALESCE(?, completed_at), updated_at = ?
             WHERE id = ?",
        )
        .bind(status.as_str())
        .bind(&completed_at)
        .bind(&now)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Record the linked pull request and the status that comes with it
    pub async fn set_pull_request(
        pool: &DatabasePool,
        id: &str,
        pr_number: i64,
        status: TaskStatus,
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query("UPDATE tasks SET pr_number = ?, status = ?, updated_at = ? WHERE id = ?")
            .bind(pr_number)
            .bind(status.as_str())
            .bind(&now)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count all tasks
    pub async fn count(pool: &DatabasePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
