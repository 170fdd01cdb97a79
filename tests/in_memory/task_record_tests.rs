//! Administrator task maintenance through the in-memory adapters.

use super::helpers::{Desk, desk};
use rstest::rstest;
use taskdesk::ErrorKind;
use taskdesk::task::{
    domain::TaskStage,
    ports::TaskRepository,
    services::{SetStatusRequest, TaskDetailsRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn staff_see_only_their_own_tasks(desk: Desk) -> eyre::Result<()> {
    let admin = desk.bootstrap_admin().await?;
    let u1 = desk.staff(&admin, "u1").await?;
    let u2 = desk.staff(&admin, "u2").await?;
    let mine = desk
        .records
        .create(
            TaskDetailsRequest::new("Report", "Finance", u1.id(), "2025-01-10T00:00"),
            &admin,
        )
        .await?;
    desk.records
        .create(
            TaskDetailsRequest::new("Audit", "Finance", u2.id(), "2025-01-05T00:00"),
            &admin,
        )
        .await?;

    let visible = desk.records.list_visible(&u1).await?;
    let ids: Vec<_> = visible.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![mine.id()]);

    let all = desk.records.list_visible(&admin).await?;
    let titles: Vec<&str> = all.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["Audit", "Report"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn staff_cannot_maintain_tasks(desk: Desk) -> eyre::Result<()> {
    let admin = desk.bootstrap_admin().await?;
    let u1 = desk.staff(&admin, "u1").await?;
    let task = desk
        .records
        .create(
            TaskDetailsRequest::new("Report", "Finance", u1.id(), "2025-01-10T00:00"),
            &admin,
        )
        .await?;

    let create = desk
        .records
        .create(
            TaskDetailsRequest::new("Mine now", "Finance", u1.id(), "2025-01-10T00:00"),
            &u1,
        )
        .await
        .map(|_| ());
    let update = desk
        .records
        .update(
            task.id(),
            TaskDetailsRequest::new("Renamed", "Finance", u1.id(), "2025-01-10T00:00"),
            &u1,
        )
        .await
        .map(|_| ());
    let delete = desk.records.delete(task.id(), &u1).await;

    for result in [create, update, delete] {
        let err = result.expect_err("staff maintenance should be refused");
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }
    let stored = desk
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should still exist"))?;
    assert_eq!(stored, task);
    assert_eq!(desk.tasks.list_all().await?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_worked_task_keeps_its_progress(desk: Desk) -> eyre::Result<()> {
    let admin = desk.bootstrap_admin().await?;
    let u1 = desk.staff(&admin, "u1").await?;
    let task = desk
        .records
        .create(
            TaskDetailsRequest::new("Report", "Finance", u1.id(), "2025-01-10T00:00"),
            &admin,
        )
        .await?;
    let received = desk
        .statuses
        .set_status(
            SetStatusRequest::new(task.id(), "received", true),
            &u1,
        )
        .await?;

    let edited = desk
        .records
        .update(
            task.id(),
            TaskDetailsRequest::new("Report v2", "Board", u1.id(), "2025-01-12T00:00"),
            &admin,
        )
        .await?;

    assert_eq!(edited.stage(), TaskStage::Received);
    assert_eq!(edited.received_at(), received.received_at());
    assert_eq!(edited.title().as_str(), "Report v2");
    Ok(())
}
