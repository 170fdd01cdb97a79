//! Assignee-driven changes to the received and completed flags.

use super::{TaskServiceError, TaskServiceResult};
use crate::access::{self, Actor, GuardedAction};
use crate::task::{
    domain::{StatusField, Task, TaskDomainError, TaskId},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for setting one status flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetStatusRequest {
    task_id: TaskId,
    field: String,
    value: bool,
}

impl SetStatusRequest {
    /// Creates a request naming the flag by its field name.
    #[must_use]
    pub fn new(task_id: TaskId, field: impl Into<String>, value: bool) -> Self {
        Self {
            task_id,
            field: field.into(),
            value,
        }
    }

    /// Returns the targeted task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }
}

/// Task status orchestration service.
#[derive(Clone)]
pub struct TaskStatusService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<T, C> TaskStatusService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task status service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Sets the requested flag on behalf of the task's assignee.
    ///
    /// Requesting the value a flag already has succeeds without writing.
    /// The task is re-read before the change, and the write is rejected if
    /// another request modified the task in between.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::PermissionDenied`] when the actor is not the
    /// assignee, [`TaskServiceError::Domain`] for an unknown field or an
    /// invalid transition, or [`TaskServiceError::Repository`] when the write
    /// fails or conflicts.
    pub async fn set_status(
        &self,
        request: SetStatusRequest,
        actor: &Actor,
    ) -> TaskServiceResult<Task> {
        let SetStatusRequest {
            task_id,
            field: field_name,
            value,
        } = request;

        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;
        access::require(
            access::can_toggle_status(actor, &task),
            actor,
            GuardedAction::ToggleStatus(task_id),
        )?;
        let field = StatusField::try_from(field_name.as_str())?;

        let read_updated_at = task.updated_at();
        let changed = task
            .set_status(field, value, &*self.clock)
            .inspect_err(log_rejected)?;
        if !changed {
            tracing::debug!(%task_id, %field, value, "status already set");
            return Ok(task);
        }

        self.tasks.update(&task, read_updated_at).await?;
        tracing::info!(
            %task_id,
            %field,
            value,
            stage = %task.stage(),
            actor = %actor.id(),
            "task status changed"
        );
        Ok(task)
    }
}

fn log_rejected(err: &TaskDomainError) {
    if let TaskDomainError::InvalidTransition {
        task_id,
        from,
        field,
        value,
    } = err
    {
        tracing::warn!(%task_id, %from, %field, value, "status transition rejected");
    }
}
