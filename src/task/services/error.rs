//! Service-level errors shared by the task services.

use crate::ErrorKind;
use crate::access::PermissionDenied;
use crate::account::domain::AccountId;
use crate::account::ports::AccountRepositoryError;
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The actor may not perform the operation.
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The requested assignee account does not exist.
    #[error("assignee account not found: {0}")]
    AssigneeNotFound(AccountId),
    /// Domain validation or a workflow rule failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
    /// Account lookup failed.
    #[error(transparent)]
    AccountRepository(#[from] AccountRepositoryError),
}

impl TaskServiceError {
    /// Classifies the error for presentation at the boundary.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AssigneeNotFound(_) => ErrorKind::Validation,
            Self::Domain(TaskDomainError::InvalidTransition { .. }) => {
                ErrorKind::InvalidTransition
            }
            Self::Domain(TaskDomainError::InconsistentStatus(_)) => ErrorKind::Storage,
            Self::Domain(_) => ErrorKind::Validation,
            Self::Repository(TaskRepositoryError::Conflict(_)) => ErrorKind::Conflict,
            Self::Repository(_) | Self::AccountRepository(_) => ErrorKind::Storage,
        }
    }
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::UnknownAssignee(id) => Self::AssigneeNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
