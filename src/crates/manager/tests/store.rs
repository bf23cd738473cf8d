// Integration tests for the persistence layer: uniqueness constraints,
// cascade deletion, and status bookkeeping against a migrated database.

use manager::db::repositories::{
    RepositoryRepository, ReviewRepository, SessionRepository, TaskRepository,
};
use manager::db::{DatabaseConnection, DatabaseError};
use manager::TaskStatus;
use uuid::Uuid;

async fn connect() -> DatabaseConnection {
    let db = DatabaseConnection::new("sqlite::memory:").await.unwrap();
    db.run_migrations().await.unwrap();
    db
}

async fn seed_repository(db: &DatabaseConnection) -> manager::db::models::Repository {
    RepositoryRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        "octo".to_string(),
        "widgets".to_string(),
        Some("test repository".to_string()),
        false,
        true,
    )
    .await
    .unwrap()
}

async fn seed_task(db: &DatabaseConnection, repository_id: &str) -> manager::db::models::Task {
    TaskRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        repository_id.to_string(),
        7,
        "Fix the build".to_string(),
        None,
        TaskStatus::Assigned,
        Some("2024-05-01T00:00:00Z".to_string()),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn file_backed_database_is_created_and_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manager.db");
    let url = format!("sqlite:{}", path.display());

    let db = DatabaseConnection::new(&url).await.unwrap();
    db.run_migrations().await.unwrap();
    seed_repository(&db).await;
    db.close().await;
    assert!(path.exists());

    // Reopening sees the persisted row.
    let db = DatabaseConnection::new(&url).await.unwrap();
    db.run_migrations().await.unwrap();
    assert_eq!(RepositoryRepository::count(db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_repository_creates_no_row() {
    let db = connect().await;
    seed_repository(&db).await;

    let result = RepositoryRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        "octo".to_string(),
        "widgets".to_string(),
        None,
        false,
        false,
    )
    .await;

    let err: DatabaseError = result.unwrap_err().into();
    assert!(err.is_constraint_violation());
    assert_eq!(RepositoryRepository::count(db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_task_per_issue_creates_no_row() {
    let db = connect().await;
    let repo = seed_repository(&db).await;
    seed_task(&db, &repo.id).await;

    let result = TaskRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        repo.id.clone(),
        7,
        "Duplicate".to_string(),
        None,
        TaskStatus::Created,
        None,
    )
    .await;

    let err: DatabaseError = result.unwrap_err().into();
    assert!(err.is_constraint_violation());
    assert_eq!(TaskRepository::count(db.pool()).await.unwrap(), 1);

    // A different issue in the same repository is fine.
    TaskRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        repo.id,
        8,
        "Another".to_string(),
        None,
        TaskStatus::Created,
        None,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn deleting_repository_cascades() {
    let db = connect().await;
    let repo = seed_repository(&db).await;
    let task = seed_task(&db, &repo.id).await;

    ReviewRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        task.id.clone(),
        12,
        "APPROVE".to_string(),
        None,
    )
    .await
    .unwrap();
    SessionRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        task.id.clone(),
        Some("agent-session-7".to_string()),
    )
    .await
    .unwrap();

    assert!(RepositoryRepository::delete(db.pool(), &repo.id)
        .await
        .unwrap());

    assert_eq!(TaskRepository::count(db.pool()).await.unwrap(), 0);
    assert!(ReviewRepository::list(db.pool()).await.unwrap().is_empty());
    assert!(
        SessionRepository::get_by_session_id(db.pool(), "agent-session-7")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn terminal_status_sets_completed_at() {
    let db = connect().await;
    let repo = seed_repository(&db).await;
    let task = seed_task(&db, &repo.id).await;
    assert!(task.completed_at.is_none());

    TaskRepository::update_status(db.pool(), &task.id, TaskStatus::Completed)
        .await
        .unwrap();

    let updated = TaskRepository::get_by_id(db.pool(), &task.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.task_status(), TaskStatus::Completed);
    assert!(updated.completed_at.is_some());

    // Moving back to a non-terminal status keeps the original timestamp.
    TaskRepository::update_status(db.pool(), &task.id, TaskStatus::InProgress)
        .await
        .unwrap();
    let again = TaskRepository::get_by_id(db.pool(), &task.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.completed_at, updated.completed_at);
}

#[tokio::test]
async fn linking_pull_request_updates_status() {
    let db = connect().await;
    let repo = seed_repository(&db).await;
    let task = seed_task(&db, &repo.id).await;

    TaskRepository::set_pull_request(db.pool(), &task.id, 12, TaskStatus::ReadyForReview)
        .await
        .unwrap();

    let updated = TaskRepository::get_by_id(db.pool(), &task.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.pr_number, Some(12));
    assert_eq!(updated.task_status(), TaskStatus::ReadyForReview);
}

#[tokio::test]
async fn active_listing_filters_by_status() {
    let db = connect().await;
    let repo = seed_repository(&db).await;
    let task = seed_task(&db, &repo.id).await;

    assert_eq!(TaskRepository::list_active(db.pool()).await.unwrap().len(), 1);

    TaskRepository::update_status(db.pool(), &task.id, TaskStatus::Completed)
        .await
        .unwrap();
    assert!(TaskRepository::list_active(db.pool())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn session_status_update_by_external_id() {
    let db = connect().await;
    let repo = seed_repository(&db).await;
    let task = seed_task(&db, &repo.id).await;

    SessionRepository::create(
        db.pool(),
        Uuid::new_v4().to_string(),
        task.id.clone(),
        Some("agent-session-7".to_string()),
    )
    .await
    .unwrap();

    SessionRepository::update_status(
        db.pool(),
        "agent-session-7",
        "completed",
        Some("done".to_string()),
    )
    .await
    .unwrap();

    let session = SessionRepository::get_by_session_id(db.pool(), "agent-session-7")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.status, "completed");
    assert_eq!(session.logs.as_deref(), Some("done"));
    assert!(session.completed_at.is_some());
}
