//! Agent gateway: the boundary to the external coding-agent protocol
//!
//! The live/simulated split is explicit: one [`AgentGateway`] implementation
//! is selected at startup from configuration, and every outcome carries a
//! `simulated` flag, so a caller can always tell a fabricated result from a
//! real one.

pub mod gateway;
pub mod live;
pub mod simulated;

pub use gateway::{
    AgentGateway, AssignmentOutcome, CommentsOutcome, DelegatedPullRequest, PullRequestOutcome,
};
pub use live::LiveAgentGateway;
pub use simulated::SimulatedAgentGateway;

use thiserror::Error;

use crate::github::GitHubError;

/// Errors from the agent gateway
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The operation cannot be performed by this gateway
    #[error("Operation not supported by this gateway: {0}")]
    Unsupported(String),

    /// The agent is not enabled for the target repository
    #[error("Coding agent is not available for {0}")]
    AgentUnavailable(String),

    /// Underlying GitHub API failure
    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

/// Result type for gateway operations
pub type IntegrationResult<T> = std::result::Result<T, IntegrationError>;
