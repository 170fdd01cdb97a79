//! Administrator maintenance of task records and per-actor visibility.

use super::{TaskServiceError, TaskServiceResult};
use crate::access::{self, Actor, GuardedAction};
use crate::account::{domain::AccountId, ports::AccountRepository};
use crate::task::{
    domain::{SendingUnit, Task, TaskDetails, TaskId, TaskTitle, parse_due_timestamp},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;

/// Request payload carrying the administrator-editable task fields.
///
/// The due timestamp stays textual until validation so that malformed form
/// input surfaces as a validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetailsRequest {
    title: String,
    sending_unit: String,
    assignee: AccountId,
    due_at: String,
}

impl TaskDetailsRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        sending_unit: impl Into<String>,
        assignee: AccountId,
        due_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            sending_unit: sending_unit.into(),
            assignee,
            due_at: due_at.into(),
        }
    }

    /// Returns the requested assignee.
    #[must_use]
    pub const fn assignee(&self) -> AccountId {
        self.assignee
    }

    fn validate(self) -> TaskServiceResult<TaskDetails> {
        Ok(TaskDetails {
            title: TaskTitle::new(self.title)?,
            sending_unit: SendingUnit::new(self.sending_unit)?,
            assignee: self.assignee,
            due_at: parse_due_timestamp(&self.due_at)?,
        })
    }
}

/// Task record orchestration service.
#[derive(Clone)]
pub struct TaskRecordService<T, A, C>
where
    T: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    accounts: Arc<A>,
    clock: Arc<C>,
}

impl<T, A, C> TaskRecordService<T, A, C>
where
    T: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task record service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, accounts: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            accounts,
            clock,
        }
    }

    /// Lists the tasks the actor may see, soonest due first.
    ///
    /// Administrators see every task; everyone else sees the tasks assigned
    /// to them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn list_visible(&self, actor: &Actor) -> TaskServiceResult<Vec<Task>> {
        let tasks = if actor.is_administrator() {
            self.tasks.list_all().await?
        } else {
            self.tasks.list_by_assignee(actor.id()).await?
        };
        Ok(tasks)
    }

    /// Retrieves one task the actor may see.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist and
    /// [`TaskServiceError::PermissionDenied`] when the actor is neither an
    /// administrator nor the assignee.
    pub async fn find_visible(&self, id: TaskId, actor: &Actor) -> TaskServiceResult<Task> {
        let task = self.load(id).await?;
        access::require(
            access::can_view_task(actor, &task),
            actor,
            GuardedAction::ViewTask(id),
        )?;
        Ok(task)
    }

    /// Creates a task in the not-received stage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::PermissionDenied`] for non-administrators,
    /// [`TaskServiceError::Domain`] for invalid fields,
    /// [`TaskServiceError::AssigneeNotFound`] when the assignee does not exist,
    /// or a repository error when persistence fails.
    pub async fn create(
        &self,
        request: TaskDetailsRequest,
        actor: &Actor,
    ) -> TaskServiceResult<Task> {
        access::require(
            access::can_manage_tasks(actor),
            actor,
            GuardedAction::ManageTasks,
        )?;
        let details = request.validate()?;
        self.ensure_assignee_exists(details.assignee).await?;

        let task = Task::new(details, &*self.clock);
        self.tasks.store(&task).await?;
        tracing::info!(
            task_id = %task.id(),
            assignee = %task.assignee(),
            actor = %actor.id(),
            "task created"
        );
        Ok(task)
    }

    /// Replaces the descriptive fields of a task.
    ///
    /// The workflow status and its timestamps are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::PermissionDenied`] for non-administrators,
    /// [`TaskServiceError::NotFound`] when the task does not exist, the same
    /// validation errors as [`Self::create`], or
    /// [`TaskServiceError::Repository`] wrapping a conflict when the task was
    /// changed concurrently.
    pub async fn update(
        &self,
        id: TaskId,
        request: TaskDetailsRequest,
        actor: &Actor,
    ) -> TaskServiceResult<Task> {
        access::require(
            access::can_manage_tasks(actor),
            actor,
            GuardedAction::ManageTasks,
        )?;
        let mut task = self.load(id).await?;
        let details = request.validate()?;
        self.ensure_assignee_exists(details.assignee).await?;

        let read_updated_at = task.updated_at();
        task.revise(details, &*self.clock);
        self.tasks.update(&task, read_updated_at).await?;
        tracing::info!(task_id = %id, actor = %actor.id(), "task updated");
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::PermissionDenied`] for non-administrators
    /// and [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId, actor: &Actor) -> TaskServiceResult<()> {
        access::require(
            access::can_manage_tasks(actor),
            actor,
            GuardedAction::ManageTasks,
        )?;
        self.tasks.delete(id).await?;
        tracing::info!(task_id = %id, actor = %actor.id(), "task deleted");
        Ok(())
    }

    async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    async fn ensure_assignee_exists(&self, assignee: AccountId) -> TaskServiceResult<()> {
        if self.accounts.find_by_id(assignee).await?.is_none() {
            return Err(TaskServiceError::AssigneeNotFound(assignee));
        }
        Ok(())
    }
}
