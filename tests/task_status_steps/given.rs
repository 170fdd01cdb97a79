//! Given steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::account::{
    domain::Username,
    ports::AccountRepository,
    services::{BootstrapAdministratorRequest, CreateAccountRequest},
};
use taskdesk::task::services::TaskDetailsRequest;

const DIGEST: &str = "pbkdf2_sha256$1$salt$digest";

#[given(r#"an administrator and staff members "{first}" and "{second}""#)]
fn administrator_and_staff(
    world: &mut TaskStatusWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    run_async(world.directory.ensure_administrator(BootstrapAdministratorRequest::new(
        "admin",
        "admin@example.com",
        DIGEST,
    )))
    .wrap_err("bootstrap administrator")?;
    let admin_username = Username::new("admin")?;
    let admin_account = run_async(world.accounts.find_by_username(&admin_username))?
        .ok_or_else(|| eyre::eyre!("administrator missing after bootstrap"))?;
    let admin = run_async(world.directory.resolve_actor(admin_account.id()))
        .wrap_err("resolve administrator")?;

    for username in [first, second] {
        let created = run_async(
            world
                .directory
                .create(CreateAccountRequest::new(username.as_str(), DIGEST), &admin),
        )
        .wrap_err_with(|| format!("create staff member {username}"))?;
        let staff = run_async(world.directory.resolve_actor(created.id()))
            .wrap_err_with(|| format!("resolve staff member {username}"))?;
        world.staff.insert(username, staff);
    }
    world.admin = Some(admin);
    Ok(())
}

#[given(r#"a task "{title}" assigned to "{username}" due "{due}""#)]
fn task_assigned(
    world: &mut TaskStatusWorld,
    title: String,
    username: String,
    due: String,
) -> Result<(), eyre::Report> {
    let assignee = world.staff_member(&username)?.id();
    let admin = world
        .admin
        .clone()
        .ok_or_else(|| eyre::eyre!("missing administrator in scenario world"))?;
    let created = run_async(world.records.create(
        TaskDetailsRequest::new(title, "Operations", assignee, due),
        &admin,
    ))
    .wrap_err("create scenario task")?;
    world.task = Some(created);
    Ok(())
}
