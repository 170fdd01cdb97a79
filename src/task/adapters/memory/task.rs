//! In-memory repository for task records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::account::domain::AccountId;
use crate::persistence::InMemoryStore;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Writes check the assignee against the accounts held in the same store and
/// raise [`TaskRepositoryError::UnknownAssignee`] like the relational
/// foreign key does.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    store: InMemoryStore,
}

impl InMemoryTaskRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: &InMemoryStore) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

/// Collects matching tasks in due order, ties by creation order.
fn sorted_tasks<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<Task> {
    let mut listed: Vec<Task> = tasks.cloned().collect();
    listed.sort_by_key(|task| (task.due_at(), task.created_at()));
    listed
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tables = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;
        if tables.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        if !tables.accounts.contains_key(&task.assignee()) {
            return Err(TaskRepositoryError::UnknownAssignee(task.assignee()));
        }
        tables.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(
        &self,
        task: &Task,
        read_updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        let mut tables = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;

        let assignee_exists = tables.accounts.contains_key(&task.assignee());
        let stored = tables
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        if stored.updated_at() != read_updated_at {
            return Err(TaskRepositoryError::Conflict(task.id()));
        }
        if !assignee_exists {
            return Err(TaskRepositoryError::UnknownAssignee(task.assignee()));
        }
        *stored = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tables = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;
        tables
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tables = self
            .store
            .read()
            .map_err(TaskRepositoryError::persistence)?;
        Ok(tables.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tables = self
            .store
            .read()
            .map_err(TaskRepositoryError::persistence)?;
        Ok(sorted_tasks(tables.tasks.values()))
    }

    async fn list_by_assignee(&self, assignee: AccountId) -> TaskRepositoryResult<Vec<Task>> {
        let tables = self
            .store
            .read()
            .map_err(TaskRepositoryError::persistence)?;
        Ok(sorted_tasks(
            tables
                .tasks
                .values()
                .filter(|task| task.assignee() == assignee),
        ))
    }
}
