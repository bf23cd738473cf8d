//! HTTP API module
//!
//! JSON route layer over the store, the GitHub client, and the agent
//! gateway. Every failure is translated here into an error envelope with
//! an appropriate status code; nothing is retried.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::AppState;
