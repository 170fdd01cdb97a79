//! Workflow status of a task and its transition table.
//!
//! A task moves through three reachable stages driven by two flags:
//!
//! ```text
//! NotReceived --receive--> Received --complete--> Completed
//!      ^                    |    ^                   |
//!      +-----un-receive-----+    +----un-complete----+
//!      ^                                             |
//!      +------------un-receive (cascade)-------------+
//! ```
//!
//! [`TaskStatus::apply`] is the single place where these edges are defined.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two status flags an assignee may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusField {
    /// The assignee has acknowledged the task.
    Received,
    /// The assignee has finished the task.
    Completed,
}

impl StatusField {
    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StatusField {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "received" => Ok(Self::Received),
            "completed" => Ok(Self::Completed),
            _ => Err(TaskDomainError::UnknownStatusField(value.to_owned())),
        }
    }
}

/// Fieldless projection of [`TaskStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStage {
    /// Neither flag is set.
    NotReceived,
    /// Received but not completed.
    Received,
    /// Received and completed.
    Completed,
}

impl TaskStage {
    /// Returns the canonical stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotReceived => "not_received",
            Self::Received => "received",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status with the timestamps each stage carries.
///
/// Holding the timestamps inside the variants makes the flag invariants
/// structural: a completed task always has both timestamps, an unreceived
/// task has neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum TaskStatus {
    /// Neither received nor completed.
    NotReceived,
    /// Received, not yet completed.
    Received {
        /// When the assignee acknowledged the task.
        received_at: DateTime<Utc>,
    },
    /// Received and completed.
    Completed {
        /// When the assignee acknowledged the task.
        received_at: DateTime<Utc>,
        /// When the assignee finished the task.
        completed_at: DateTime<Utc>,
    },
}

impl TaskStatus {
    /// Rebuilds a status from its stored flag and timestamp columns.
    ///
    /// Returns `None` when the columns contradict each other.
    #[must_use]
    pub const fn from_columns(
        received: bool,
        completed: bool,
        received_at: Option<DateTime<Utc>>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        match (received, completed, received_at, completed_at) {
            (false, false, None, None) => Some(Self::NotReceived),
            (true, false, Some(received_at), None) => Some(Self::Received { received_at }),
            (true, true, Some(received_at), Some(completed_at)) => Some(Self::Completed {
                received_at,
                completed_at,
            }),
            _ => None,
        }
    }

    /// Returns the fieldless stage.
    #[must_use]
    pub const fn stage(self) -> TaskStage {
        match self {
            Self::NotReceived => TaskStage::NotReceived,
            Self::Received { .. } => TaskStage::Received,
            Self::Completed { .. } => TaskStage::Completed,
        }
    }

    /// Returns the received flag.
    #[must_use]
    pub const fn is_received(self) -> bool {
        !matches!(self, Self::NotReceived)
    }

    /// Returns the completed flag.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Returns when the task was received, if it is.
    #[must_use]
    pub const fn received_at(self) -> Option<DateTime<Utc>> {
        match self {
            Self::NotReceived => None,
            Self::Received { received_at } | Self::Completed { received_at, .. } => {
                Some(received_at)
            }
        }
    }

    /// Returns when the task was completed, if it is.
    #[must_use]
    pub const fn completed_at(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Completed { completed_at, .. } => Some(completed_at),
            Self::NotReceived | Self::Received { .. } => None,
        }
    }

    /// Applies one flag change, stamping newly set flags with `now`.
    ///
    /// Setting a flag to the value it already has returns the status
    /// unchanged, timestamps included. Returns `None` when the change is not
    /// permitted, which only happens when completing an unreceived task.
    #[must_use]
    pub const fn apply(self, field: StatusField, value: bool, now: DateTime<Utc>) -> Option<Self> {
        match (self, field, value) {
            (Self::NotReceived, StatusField::Received, true) => {
                Some(Self::Received { received_at: now })
            }
            (Self::NotReceived, StatusField::Received | StatusField::Completed, false) => {
                Some(self)
            }
            (Self::NotReceived, StatusField::Completed, true) => None,

            (Self::Received { .. }, StatusField::Received, true)
            | (Self::Received { .. }, StatusField::Completed, false) => Some(self),
            (Self::Received { .. }, StatusField::Received, false) => Some(Self::NotReceived),
            (Self::Received { received_at }, StatusField::Completed, true) => {
                Some(Self::Completed {
                    received_at,
                    completed_at: now,
                })
            }

            (Self::Completed { .. }, StatusField::Received | StatusField::Completed, true) => {
                Some(self)
            }
            // Un-receiving revokes completion as well.
            (Self::Completed { .. }, StatusField::Received, false) => Some(Self::NotReceived),
            (Self::Completed { received_at, .. }, StatusField::Completed, false) => {
                Some(Self::Received { received_at })
            }
        }
    }
}
