//! Dashboard service for delegating GitHub issues to a coding agent
//!
//! This crate tracks GitHub issues assigned to an automated coding agent,
//! records pull-request review decisions, and exposes a JSON REST API for
//! managing repositories, tasks, reviews, and agent sessions.

pub mod agent;
pub mod api;
pub mod config;
pub mod db;
pub mod github;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a delegated task
///
/// The progression is monotonic in practice (created → assigned →
/// in_progress → ready_for_review → completed) but is deliberately not
/// enforced as a strict state machine: review actions and the status
/// resolver both write whatever label currently applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task record exists but the agent has not been engaged
    Created,
    /// Issue handed to the agent, no activity observed yet
    Assigned,
    /// Agent has commented or opened a draft pull request
    InProgress,
    /// Linked pull request is open and no longer a draft
    ReadyForReview,
    /// Linked pull request was merged
    Completed,
    /// Linked pull request was closed without merging
    Failed,
    /// A reviewer approved the pull request
    Approved,
    /// A reviewer requested changes on the pull request
    ChangesRequested,
}

impl TaskStatus {
    /// Database/text representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::ReadyForReview => "ready_for_review",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
            TaskStatus::Approved => "approved",
            TaskStatus::ChangesRequested => "changes_requested",
        }
    }

    /// Parse a status from its text representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created" => Some(TaskStatus::Created),
            "assigned" => Some(TaskStatus::Assigned),
            "in_progress" => Some(TaskStatus::InProgress),
            "ready_for_review" => Some(TaskStatus::ReadyForReview),
            "completed" => Some(TaskStatus::Completed),
            "failed" => Some(TaskStatus::Failed),
            "approved" => Some(TaskStatus::Approved),
            "changes_requested" => Some(TaskStatus::ChangesRequested),
            _ => None,
        }
    }

    /// Whether the task still counts as active on the dashboard
    pub fn is_active(&self) -> bool {
        matches!(self, TaskStatus::Assigned | TaskStatus::InProgress)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
