//! `PostgreSQL` repository implementation for task storage.

use super::{models::TaskRow, schema::tasks};
use crate::account::domain::AccountId;
use crate::task::{
    domain::{
        PersistedTaskData, SendingUnit, Task, TaskDetails, TaskDomainError, TaskId, TaskStatus,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let assignee = task.assignee();
        let row = to_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TaskRepositoryError::UnknownAssignee(assignee)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        task: &Task,
        read_updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let assignee = task.assignee();
        let row = to_row(task);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(task_id.into_inner()))
                    .filter(tasks::updated_at.eq(read_updated_at)),
            )
            .set(&row)
            .execute(connection)
            .map_err(|err| match err {
                DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                    TaskRepositoryError::UnknownAssignee(assignee)
                }
                _ => TaskRepositoryError::persistence(err),
            })?;

            if updated_count > 0 {
                return Ok(());
            }

            // The guarded UPDATE matched nothing: tell a vanished row apart
            // from one that another writer changed.
            let exists = diesel::select(diesel::dsl::exists(
                tasks::table.filter(tasks::id.eq(task_id.into_inner())),
            ))
            .get_result::<bool>(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if exists {
                Err(TaskRepositoryError::Conflict(task_id))
            } else {
                Err(TaskRepositoryError::NotFound(task_id))
            }
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order((tasks::due_at.asc(), tasks::created_at.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_assignee(&self, assignee: AccountId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::assignee_id.eq(assignee.into_inner()))
                .order((tasks::due_at.asc(), tasks::created_at.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        sending_unit: task.sending_unit().as_str().to_owned(),
        assignee_id: task.assignee().into_inner(),
        due_at: task.due_at(),
        received: task.is_received(),
        completed: task.is_completed(),
        received_at: task.received_at(),
        completed_at: task.completed_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        sending_unit,
        assignee_id,
        due_at,
        received,
        completed,
        received_at,
        completed_at,
        created_at,
        updated_at,
    } = row;

    let task_id = TaskId::from_uuid(id);
    let status = TaskStatus::from_columns(received, completed, received_at, completed_at)
        .ok_or_else(|| {
            TaskRepositoryError::invalid_persisted_data(TaskDomainError::InconsistentStatus(
                task_id,
            ))
        })?;

    let details = TaskDetails {
        title: TaskTitle::new(title).map_err(TaskRepositoryError::invalid_persisted_data)?,
        sending_unit: SendingUnit::new(sending_unit)
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
        assignee: AccountId::from_uuid(assignee_id),
        due_at,
    };

    Ok(Task::from_persisted(PersistedTaskData {
        id: task_id,
        details,
        status,
        created_at,
        updated_at,
    }))
}
