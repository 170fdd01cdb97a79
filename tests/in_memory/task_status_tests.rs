//! Assignee workflow through the in-memory adapters.

use super::helpers::{Desk, desk};
use rstest::rstest;
use taskdesk::ErrorKind;
use taskdesk::account::services::UpdateAccountRequest;
use taskdesk::task::{
    domain::TaskStage,
    ports::TaskRepository,
    services::{SetStatusRequest, TaskDetailsRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_is_received_completed_and_unreceived(desk: Desk) -> eyre::Result<()> {
    let admin = desk.bootstrap_admin().await?;
    let u1 = desk.staff(&admin, "u1").await?;
    let report = desk
        .records
        .create(
            TaskDetailsRequest::new("Report", "Finance", u1.id(), "2025-01-10T00:00"),
            &admin,
        )
        .await?;
    assert_eq!(report.stage(), TaskStage::NotReceived);

    let received = desk
        .statuses
        .set_status(SetStatusRequest::new(report.id(), "received", true), &u1)
        .await?;
    assert!(received.is_received());
    assert!(received.received_at().is_some());

    let completed = desk
        .statuses
        .set_status(SetStatusRequest::new(report.id(), "completed", true), &u1)
        .await?;
    assert!(completed.is_completed());
    assert!(completed.completed_at().is_some());

    desk.statuses
        .set_status(SetStatusRequest::new(report.id(), "received", false), &u1)
        .await?;

    let stored = desk
        .tasks
        .find_by_id(report.id())
        .await?
        .ok_or_else(|| eyre::eyre!("report should exist"))?;
    assert!(!stored.is_received());
    assert!(!stored.is_completed());
    assert_eq!(stored.received_at(), None);
    assert_eq!(stored.completed_at(), None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn another_staff_member_cannot_receive(desk: Desk) -> eyre::Result<()> {
    let admin = desk.bootstrap_admin().await?;
    let u1 = desk.staff(&admin, "u1").await?;
    let u2 = desk.staff(&admin, "u2").await?;
    let report = desk
        .records
        .create(
            TaskDetailsRequest::new("Report", "Finance", u1.id(), "2025-01-10T00:00"),
            &admin,
        )
        .await?;

    let err = desk
        .statuses
        .set_status(SetStatusRequest::new(report.id(), "received", true), &u2)
        .await
        .expect_err("u2 should be refused");

    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    let stored = desk
        .tasks
        .find_by_id(report.id())
        .await?
        .ok_or_else(|| eyre::eyre!("report should exist"))?;
    assert_eq!(stored, report);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_assignee_is_refused_at_resolution(desk: Desk) -> eyre::Result<()> {
    let admin = desk.bootstrap_admin().await?;
    let u1 = desk.staff(&admin, "u1").await?;
    desk.directory
        .update(
            u1.id(),
            UpdateAccountRequest::new("u1").with_active(false),
            &admin,
        )
        .await?;

    let err = desk
        .directory
        .resolve_actor(u1.id())
        .await
        .expect_err("inactive account should not resolve");

    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    Ok(())
}
