//! Database repositories
//!
//! Pure data access for the persisted entities; uniqueness constraints are
//! enforced by the schema and surface as constraint-violation errors.

pub mod repository_repo;
pub mod review_repo;
pub mod session_repo;
pub mod task_repo;

pub use repository_repo::RepositoryRepository;
pub use review_repo::ReviewRepository;
pub use session_repo::SessionRepository;
pub use task_repo::TaskRepository;
