//! Unit tests for the task module.


use crate::account::domain::AccountId;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

mock! {
    TaskRepo {}

    #[async_trait]
    impl TaskRepository for TaskRepo {
        async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn update(&self, task: &Task, read_updated_at: DateTime<Utc>) -> TaskRepositoryResult<()>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn list_by_assignee(&self, assignee: AccountId) -> TaskRepositoryResult<Vec<Task>>;
    }
}
