//! Database models

pub mod repository;
pub mod review;
pub mod session;
pub mod task;

pub use repository::Repository;
pub use review::Review;
pub use session::AgentSession;
pub use task::Task;
