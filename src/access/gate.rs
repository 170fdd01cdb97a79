//! Authorization predicates.
//!
//! The predicates are pure functions of the actor and the resource; they
//! never touch storage.

use super::{Actor, GuardedAction, PermissionDenied};
use crate::account::domain::AccountId;
use crate::task::domain::Task;

/// Returns `true` when the actor may create, edit or delete tasks.
#[must_use]
pub const fn can_manage_tasks(actor: &Actor) -> bool {
    actor.is_administrator()
}

/// Returns `true` when the actor may use the account-management operations.
#[must_use]
pub const fn can_manage_accounts(actor: &Actor) -> bool {
    actor.is_administrator()
}

/// Returns `true` when the actor may edit or delete the target account.
///
/// Administrators may manage every account except their own.
#[must_use]
pub fn can_manage_account(actor: &Actor, target: AccountId) -> bool {
    can_manage_accounts(actor) && actor.id() != target
}

/// Returns `true` when the actor may change the task's workflow status.
///
/// Only the assignee qualifies; administrators get no special treatment.
#[must_use]
pub fn can_toggle_status(actor: &Actor, task: &Task) -> bool {
    actor.id() == task.assignee()
}

/// Returns `true` when the actor may read the task.
#[must_use]
pub fn can_view_task(actor: &Actor, task: &Task) -> bool {
    actor.is_administrator() || actor.id() == task.assignee()
}

/// Converts a predicate outcome into a result.
///
/// # Errors
///
/// Returns [`PermissionDenied`] naming the actor and action when `allowed`
/// is `false`.
pub fn require(allowed: bool, actor: &Actor, action: GuardedAction) -> Result<(), PermissionDenied> {
    if allowed {
        return Ok(());
    }
    tracing::warn!(actor = %actor.id(), %action, "authorization denied");
    Err(PermissionDenied {
        actor: actor.id(),
        action,
    })
}
