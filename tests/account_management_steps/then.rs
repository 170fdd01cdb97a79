//! Then steps for account management BDD scenarios.

use super::world::{AccountWorld, run_async};
use rstest_bdd_macros::then;
use taskdesk::ErrorKind;
use taskdesk::account::{domain::Username, ports::AccountRepository};
use taskdesk::task::ports::TaskRepository;

fn expect_failure(world: &AccountWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected} failure, got {other:?}")),
    }
}

#[then("the request succeeds")]
fn request_succeeds(world: &AccountWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected success, got {other:?}")),
    }
}

#[then("the request is denied")]
fn request_denied(world: &AccountWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::PermissionDenied)
}

#[then("the request fails validation")]
fn request_fails_validation(world: &AccountWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::Validation)
}

#[then(r#"no account "{username}" exists"#)]
fn no_account_exists(world: &AccountWorld, username: String) -> Result<(), eyre::Report> {
    let lookup = Username::new(username)?;
    if let Some(found) = run_async(world.accounts.find_by_username(&lookup))? {
        return Err(eyre::eyre!("unexpected account {}", found.id()));
    }
    Ok(())
}

#[then("no tasks remain for the deleted account")]
fn no_tasks_remain(world: &AccountWorld) -> Result<(), eyre::Report> {
    let deleted = world
        .deleted
        .ok_or_else(|| eyre::eyre!("no account was deleted in this scenario"))?;
    let remaining = run_async(world.tasks.list_by_assignee(deleted))?;
    if !remaining.is_empty() {
        return Err(eyre::eyre!("{} tasks survived the deletion", remaining.len()));
    }
    Ok(())
}

#[then("the administrator account still exists")]
fn administrator_still_exists(world: &AccountWorld) -> Result<(), eyre::Report> {
    let admin = world.administrator()?;
    if run_async(world.accounts.find_by_id(admin.id()))?.is_none() {
        return Err(eyre::eyre!("administrator account was removed"));
    }
    Ok(())
}
