//! Repository port for task persistence and filtered listing.

use crate::account::domain::AccountId;
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Listings are ordered by due timestamp ascending, ties broken by creation
/// timestamp ascending.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists or [`TaskRepositoryError::UnknownAssignee`] when the assignee
    /// account does not exist.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task, provided nobody else has
    /// written it since it was read.
    ///
    /// `read_updated_at` is the `updated_at` value of the copy the caller
    /// loaded before modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or [`TaskRepositoryError::Conflict`] when the stored `updated_at` no
    /// longer matches `read_updated_at`.
    async fn update(
        &self,
        task: &Task,
        read_updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks assigned to the account.
    async fn list_by_assignee(&self, assignee: AccountId) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The referenced assignee account does not exist.
    #[error("assignee account not found: {0}")]
    UnknownAssignee(AccountId),

    /// The task was modified by another writer after it was read.
    #[error("task {0} was modified concurrently")]
    Conflict(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
