//! Task aggregate root.

use super::{
    SendingUnit, StatusField, TaskDetails, TaskDomainError, TaskId, TaskStage, TaskStatus,
    TaskTitle,
};
use crate::account::domain::AccountId;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    sending_unit: SendingUnit,
    assignee: AccountId,
    due_at: DateTime<Utc>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted descriptive fields.
    pub details: TaskDetails,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, unreceived task.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let TaskDetails {
            title,
            sending_unit,
            assignee,
            due_at,
        } = details;

        Self {
            id: TaskId::new(),
            title,
            sending_unit,
            assignee,
            due_at,
            status: TaskStatus::NotReceived,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            details,
            status,
            created_at,
            updated_at,
        } = data;

        Self {
            id,
            title: details.title,
            sending_unit: details.sending_unit,
            assignee: details.assignee,
            due_at: details.due_at,
            status,
            created_at,
            updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the issuing unit.
    #[must_use]
    pub const fn sending_unit(&self) -> &SendingUnit {
        &self.sending_unit
    }

    /// Returns the account the task is assigned to.
    #[must_use]
    pub const fn assignee(&self) -> AccountId {
        self.assignee
    }

    /// Returns the due timestamp.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the workflow stage.
    #[must_use]
    pub const fn stage(&self) -> TaskStage {
        self.status.stage()
    }

    /// Returns the received flag.
    #[must_use]
    pub const fn is_received(&self) -> bool {
        self.status.is_received()
    }

    /// Returns the completed flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Returns when the task was received, if it is.
    #[must_use]
    pub const fn received_at(&self) -> Option<DateTime<Utc>> {
        self.status.received_at()
    }

    /// Returns when the task was completed, if it is.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.status.completed_at()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the descriptive fields, leaving the workflow status intact.
    pub fn revise(&mut self, details: TaskDetails, clock: &impl Clock) {
        let TaskDetails {
            title,
            sending_unit,
            assignee,
            due_at,
        } = details;
        self.title = title;
        self.sending_unit = sending_unit;
        self.assignee = assignee;
        self.due_at = due_at;
        self.touch(clock.utc());
    }

    /// Sets one status flag.
    ///
    /// Returns `true` when the status changed and `false` when the flag
    /// already had the requested value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when completing a task
    /// that has not been received; the task is left untouched.
    pub fn set_status(
        &mut self,
        field: StatusField,
        value: bool,
        clock: &impl Clock,
    ) -> Result<bool, TaskDomainError> {
        let now = clock.utc();
        let next = self.status.apply(field, value, now).ok_or(
            TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status.stage(),
                field,
                value,
            },
        )?;

        if next == self.status {
            return Ok(false);
        }

        self.status = next;
        self.touch(now);
        Ok(true)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    ///
    /// The value is held at microsecond precision and always moves strictly
    /// forward, even when the clock has not advanced since the last write.
    fn touch(&mut self, now: DateTime<Utc>) {
        let tick = now.trunc_subsecs(6);
        self.updated_at = if tick > self.updated_at {
            tick
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}
