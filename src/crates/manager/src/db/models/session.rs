//! Agent session model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tracked execution session of the coding agent
///
/// Created when a task is handed to the agent; the status and log text are
/// updated as the session progresses.
///
/// # Timestamps
/// All timestamp fields are RFC3339 strings due to SQLite type limitations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AgentSession {
    /// Unique row identifier (UUID string)
    pub id: String,

    /// Task the session belongs to
    pub task_id: String,

    /// External session identifier reported by the agent integration
    pub session_id: Option<String>,

    /// Session status: started, running, completed, failed
    pub status: String,

    /// Accumulated session log text
    pub logs: Option<String>,

    /// Session start timestamp (RFC3339 string, optional)
    pub started_at: Option<String>,

    /// Session completion timestamp (RFC3339 string, optional)
    pub completed_at: Option<String>,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Last update timestamp (RFC3339 string)
    pub updated_at: String,
}
