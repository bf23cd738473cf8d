//! GitHub API client and task status resolution
//!
//! Provides a thin typed wrapper over the GitHub REST and GraphQL APIs plus
//! the pure status resolver that derives a task lifecycle label from
//! already-fetched issue, pull-request, and comment data.

pub mod client;
pub mod error;
pub mod status;
pub mod types;

pub use client::{GitHubClient, GitHubConfig};
pub use error::{GitHubError, GitHubResult};
pub use status::{find_linked_pull_request, resolve_status};
pub use types::*;
