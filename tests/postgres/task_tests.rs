//! Task persistence against `PostgreSQL`.

use super::helpers::{BoxError, TestDatabase, TickingClock, database, new_account, new_task};
use diesel::RunQueryDsl;
use rstest::rstest;
use taskdesk::account::{
    adapters::postgres::PostgresAccountRepository, domain::Account, ports::AccountRepository,
};
use taskdesk::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{StatusField, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

struct Context {
    database: TestDatabase,
    clock: TickingClock,
    accounts: PostgresAccountRepository,
    tasks: PostgresTaskRepository,
    assignee: Account,
}

async fn context(test_database: TestDatabase) -> Result<Context, BoxError> {
    let clock = TickingClock::default();
    let accounts = PostgresAccountRepository::new(test_database.pool.clone());
    let tasks = PostgresTaskRepository::new(test_database.pool.clone());
    let assignee = new_account("u1", false, &clock)?;
    accounts.store(&assignee).await?;
    Ok(Context {
        database: test_database,
        clock,
        accounts,
        tasks,
        assignee,
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_task_round_trips_with_status_timestamps(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let mut task = new_task(&ctx.assignee, "Report", "2025-01-10T00:00:00Z", &ctx.clock)?;
    ctx.tasks.store(&task).await?;
    assert_eq!(ctx.tasks.find_by_id(task.id()).await?, Some(task.clone()));

    let read_at = task.updated_at();
    task.set_status(StatusField::Received, true, &ctx.clock)?;
    ctx.tasks.update(&task, read_at).await?;
    let read_at = task.updated_at();
    task.set_status(StatusField::Completed, true, &ctx.clock)?;
    ctx.tasks.update(&task, read_at).await?;

    let loaded = ctx
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or("task should exist")?;
    assert_eq!(loaded, task);
    assert!(loaded.received_at() < loaded.completed_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_write_is_a_conflict(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let task = new_task(&ctx.assignee, "Report", "2025-01-10T00:00:00Z", &ctx.clock)?;
    ctx.tasks.store(&task).await?;
    let read_at = task.updated_at();

    let mut first = task.clone();
    first.set_status(StatusField::Received, true, &ctx.clock)?;
    ctx.tasks.update(&first, read_at).await?;

    let mut second = task;
    second.set_status(StatusField::Received, true, &ctx.clock)?;
    let result = ctx.tasks.update(&second, read_at).await;

    assert!(matches!(result, Err(TaskRepositoryError::Conflict(id)) if id == first.id()));
    let stored = ctx
        .tasks
        .find_by_id(first.id())
        .await?
        .ok_or("task should exist")?;
    assert_eq!(stored, first);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_or_deleting_a_missing_task_is_not_found(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let task = new_task(&ctx.assignee, "Never stored", "2025-01-10T00:00:00Z", &ctx.clock)?;

    let update = ctx.tasks.update(&task, task.updated_at()).await;
    assert!(matches!(update, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));

    let missing = TaskId::new();
    let delete = ctx.tasks.delete(missing).await;
    assert!(matches!(delete, Err(TaskRepositoryError::NotFound(id)) if id == missing));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_assignee_is_rejected_by_the_foreign_key(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let stranger = new_account("stranger", false, &ctx.clock)?;
    let task = new_task(&stranger, "Orphan", "2025-01-10T00:00:00Z", &ctx.clock)?;

    let result = ctx.tasks.store(&task).await;

    assert!(
        matches!(result, Err(TaskRepositoryError::UnknownAssignee(id)) if id == stranger.id())
    );
    assert!(ctx.tasks.find_by_id(task.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifier_is_rejected(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let task = new_task(&ctx.assignee, "Report", "2025-01-10T00:00:00Z", &ctx.clock)?;
    ctx.tasks.store(&task).await?;

    let result = ctx.tasks.store(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_ordered_by_due_time_then_creation(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let other = new_account("u2", false, &ctx.clock)?;
    ctx.accounts.store(&other).await?;

    let late = new_task(&ctx.assignee, "Late", "2025-03-01T00:00:00Z", &ctx.clock)?;
    let early = new_task(&other, "Early", "2025-01-01T00:00:00Z", &ctx.clock)?;
    let tie_first = new_task(&ctx.assignee, "Tie first", "2025-02-01T00:00:00Z", &ctx.clock)?;
    let tie_second = new_task(&ctx.assignee, "Tie second", "2025-02-01T00:00:00Z", &ctx.clock)?;
    for task in [&late, &tie_second, &early, &tie_first] {
        ctx.tasks.store(task).await?;
    }

    let all: Vec<TaskId> = ctx.tasks.list_all().await?.iter().map(Task::id).collect();
    assert_eq!(all, [early.id(), tie_first.id(), tie_second.id(), late.id()]);

    let mine: Vec<TaskId> = ctx
        .tasks
        .list_by_assignee(ctx.assignee.id())
        .await?
        .iter()
        .map(Task::id)
        .collect();
    assert_eq!(mine, [tie_first.id(), tie_second.id(), late.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn account_delete_removes_and_counts_its_tasks(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let other = new_account("u2", false, &ctx.clock)?;
    ctx.accounts.store(&other).await?;
    for title in ["First", "Second", "Third"] {
        let task = new_task(&ctx.assignee, title, "2025-01-10T00:00:00Z", &ctx.clock)?;
        ctx.tasks.store(&task).await?;
    }
    let kept = new_task(&other, "Kept", "2025-01-10T00:00:00Z", &ctx.clock)?;
    ctx.tasks.store(&kept).await?;

    let removed = ctx.accounts.delete(ctx.assignee.id()).await?;

    assert_eq!(removed, 3);
    assert!(ctx.accounts.find_by_id(ctx.assignee.id()).await?.is_none());
    assert!(ctx.tasks.list_by_assignee(ctx.assignee.id()).await?.is_empty());
    assert_eq!(ctx.tasks.list_all().await?, vec![kept]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_the_account_row_cascades_to_its_tasks(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context(database.await?).await?;
    let task = new_task(&ctx.assignee, "Report", "2025-01-10T00:00:00Z", &ctx.clock)?;
    ctx.tasks.store(&task).await?;

    let pool = ctx.database.pool.clone();
    let assignee = ctx.assignee.id().into_inner();
    tokio::task::spawn_blocking(move || -> Result<usize, BoxError> {
        let mut connection = pool.get()?;
        Ok(diesel::sql_query("DELETE FROM accounts WHERE id = $1")
            .bind::<diesel::sql_types::Uuid, _>(assignee)
            .execute(&mut *connection)?)
    })
    .await??;

    assert!(ctx.tasks.find_by_id(task.id()).await?.is_none());
    Ok(())
}
