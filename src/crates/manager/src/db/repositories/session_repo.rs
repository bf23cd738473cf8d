//! Agent session records: database operations

use chrono::Utc;

use crate::db::connection::DatabasePool;
use crate::db::models::AgentSession;

/// Data access for agent execution sessions
pub struct SessionRepository;

impl SessionRepository {
    /// Insert a new session record for a task
    pub async fn create(
        pool: &DatabasePool,
        id: String,
        task_id: String,
        session_id: Option<String>,
    ) -> Result<AgentSession, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, AgentSession>(
            "INSERT INTO agent_sessions (id, task_id, session_id, status, started_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&id)
        .bind(&task_id)
        .bind(&session_id)
        .bind("started")
        .bind(&now)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Get a session by its external session identifier
    pub async fn get_by_session_id(
        pool: &DatabasePool,
        session_id: &str,
    ) -> Result<Option<AgentSession>, sqlx::Error> {
        sqlx::query_as::<_, AgentSession>("SELECT * FROM agent_sessions WHERE session_id = ?")
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// List sessions belonging to a task, newest first
    pub async fn list_by_task(
        pool: &DatabasePool,
        task_id: &str,
    ) -> Result<Vec<AgentSession>, sqlx::Error> {
        sqlx::query_as::<_, AgentSession>(
            "SELECT * FROM agent_sessions WHERE task_id = ? ORDER BY created_at DESC",
        )
        .bind(task_id)
        .fetch_all(pool)
        .await
    }

    /// Update the status and log text of a session
    ///
    /// Terminal statuses (completed, failed) also set the completion
    /// timestamp.
    pub async fn update_status(
        pool: &DatabasePool,
        session_id: &str,
        status: &str,
        logs: Option<String>,
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        let completed_at =
            matches!(status, "completed" | "failed").then(|| now.clone());
        sqlx::query(
            "UPDATE agent_sessions
             SET status = ?, logs = COALESCE(?, logs), completed_at = COALESCE(?, completed_at), updated_at = ?
             WHERE session_id = ?",
        )
        .bind(status)
        .bind(&logs)
        .bind(&completed_at)
        .bind(&now)
        .bind(session_id)
        .execute(pool)
        .await?;

        Ok(())
    }
}
