//! Authorization failure type.

use crate::account::domain::AccountId;
use crate::task::domain::TaskId;
use std::fmt;
use thiserror::Error;

/// Operation guarded by the authorization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardedAction {
    /// Creating, editing or deleting tasks.
    ManageTasks,
    /// Listing, creating, editing or deleting accounts.
    ManageAccounts,
    /// Editing or deleting one particular account.
    ManageAccount(AccountId),
    /// Changing the workflow status of a task.
    ToggleStatus(TaskId),
    /// Reading a task.
    ViewTask(TaskId),
    /// Acting at all; raised for inactive accounts.
    Act,
}

impl fmt::Display for GuardedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManageTasks => f.write_str("manage tasks"),
            Self::ManageAccounts => f.write_str("manage accounts"),
            Self::ManageAccount(id) => write!(f, "manage account {id}"),
            Self::ToggleStatus(id) => write!(f, "change the status of task {id}"),
            Self::ViewTask(id) => write!(f, "view task {id}"),
            Self::Act => f.write_str("act while inactive"),
        }
    }
}

/// The actor lacks the role or ownership an operation requires.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("account {actor} is not permitted to {action}")]
pub struct PermissionDenied {
    /// The account that was refused.
    pub actor: AccountId,
    /// What it attempted.
    pub action: GuardedAction,
}
