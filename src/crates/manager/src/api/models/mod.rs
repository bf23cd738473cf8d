//! API models and DTOs

pub mod agent;
pub mod dashboard;
pub mod issue;
pub mod repository;
pub mod review;
pub mod task;

pub use agent::{
    AssignAgentRequest, BootstrapRequest, BootstrapResponse, CreateAndAssignRequest,
    CreateAndAssignResponse, CreatePullRequestRequest, SessionTrackResponse, ValidateQuery,
    ValidateResponse,
};
pub use dashboard::DashboardResponse;
pub use issue::{CreateIssueRequest, CreateIssueResponse};
pub use repository::{AddRepositoryRequest, RepositoryIssuesResponse, RepositoryResponse};
pub use review::{ReviewResponse, SubmitReviewRequest, TaskReviewContext};
pub use task::{TaskDetailResponse, TaskResponse, TaskStatusResponse};
