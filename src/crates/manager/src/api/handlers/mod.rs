//! API request handlers
//!
//! Handler functions for all API endpoints, organized by resource.

pub mod agent;
pub mod dashboard;
pub mod health;
pub mod issues;
pub mod repositories;
pub mod reviews;
pub mod tasks;

pub use dashboard::get_dashboard;
pub use health::{health, system_health};
pub use issues::{assign_issue, create_issue};
pub use repositories::{
    add_repository, delete_repository, get_repository, list_repositories, list_repository_issues,
    search_repositories,
};
pub use reviews::{get_task_review, list_reviews, submit_review};
pub use tasks::{get_task, get_task_status, list_tasks};
