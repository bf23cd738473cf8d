//! GitHub client error types
//!
//! Every API call makes a single attempt and propagates failures to the
//! caller; no retry policy is implemented at this layer.

use thiserror::Error;

/// Errors raised by the GitHub API client
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Network or protocol failure from the HTTP client
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP response from the REST API
    #[error("GitHub returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// GraphQL response carried an errors array
    #[error("GitHub GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Response body did not match the expected shape
    #[error("Unexpected GitHub response: {0}")]
    Decode(String),
}

impl GitHubError {
    /// Whether this error represents a 404 from the remote API
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitHubError::Status { status: 404, .. })
    }
}

/// Result type for GitHub client operations
pub type GitHubResult<T> = std::result::Result<T, GitHubError>;
