//! Error types for task domain validation and workflow changes.

use super::{StatusField, TaskId, TaskStage};
use thiserror::Error;

/// Errors returned while constructing or changing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the 255-character storage limit.
    #[error("task title exceeds 255 character limit: {0}")]
    TitleTooLong(String),

    /// The sending unit is empty after trimming.
    #[error("sending unit must not be empty")]
    EmptySendingUnit,

    /// The sending unit exceeds the 100-character storage limit.
    #[error("sending unit exceeds 100 character limit: {0}")]
    SendingUnitTooLong(String),

    /// The due timestamp could not be parsed.
    #[error("invalid due timestamp '{0}', expected RFC 3339 or YYYY-MM-DDTHH:MM")]
    InvalidDueTimestamp(String),

    /// The status field name is neither `received` nor `completed`.
    #[error("unknown status field: {0}")]
    UnknownStatusField(String),

    /// The requested status change breaks the received-before-completed rule.
    #[error("task {task_id} cannot set {field} to {value} while {from}")]
    InvalidTransition {
        /// Task whose status change was rejected.
        task_id: TaskId,
        /// Workflow stage at the time of the request.
        from: TaskStage,
        /// Field the caller tried to change.
        field: StatusField,
        /// Value the caller tried to set.
        value: bool,
    },

    /// Persisted flags and timestamps contradict each other.
    #[error("inconsistent persisted status for task {0}")]
    InconsistentStatus(TaskId),
}
