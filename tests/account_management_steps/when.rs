//! When steps for account management BDD scenarios.

use super::world::{AccountWorld, run_async};
use rstest_bdd_macros::when;
use taskdesk::account::services::CreateAccountRequest;

const DIGEST: &str = "pbkdf2_sha256$1$salt$digest";

#[when(r#"the administrator deletes "{username}""#)]
fn administrator_deletes(world: &mut AccountWorld, username: String) -> Result<(), eyre::Report> {
    let target = world.staff_member(&username)?.id();
    let admin = world.administrator()?.clone();
    world.last_result = Some(run_async(world.directory.delete(target, &admin)));
    world.deleted = Some(target);
    Ok(())
}

#[when("the administrator deletes their own account")]
fn administrator_deletes_self(world: &mut AccountWorld) -> Result<(), eyre::Report> {
    let admin = world.administrator()?.clone();
    world.last_result = Some(run_async(world.directory.delete(admin.id(), &admin)));
    Ok(())
}

#[when(r#""{actor}" creates an account "{username}""#)]
fn staff_creates_account(
    world: &mut AccountWorld,
    actor: String,
    username: String,
) -> Result<(), eyre::Report> {
    let creator = world.staff_member(&actor)?.clone();
    let result = run_async(
        world
            .directory
            .create(CreateAccountRequest::new(username, DIGEST), &creator),
    );
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}

#[when(r#"the administrator creates an account "{username}""#)]
fn administrator_creates_account(
    world: &mut AccountWorld,
    username: String,
) -> Result<(), eyre::Report> {
    let admin = world.administrator()?.clone();
    let result = run_async(
        world
            .directory
            .create(CreateAccountRequest::new(username, DIGEST), &admin),
    );
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}
