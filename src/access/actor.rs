//! The authenticated identity behind a request.

use crate::account::domain::{Account, AccountId, Username};

/// The account performing an operation, as seen by the authorization gate.
///
/// Actors are snapshots: resolve a fresh one per request so that changes to
/// the administrator flag take effect immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    id: AccountId,
    username: Username,
    is_administrator: bool,
}

impl Actor {
    /// Creates an actor from its identity fields.
    #[must_use]
    pub const fn new(id: AccountId, username: Username, is_administrator: bool) -> Self {
        Self {
            id,
            username,
            is_administrator,
        }
    }

    /// Returns the actor's account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the actor's username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns `true` when the actor holds administrator privileges.
    #[must_use]
    pub const fn is_administrator(&self) -> bool {
        self.is_administrator
    }
}

impl From<&Account> for Actor {
    fn from(account: &Account) -> Self {
        Self::new(
            account.id(),
            account.username().clone(),
            account.is_administrator(),
        )
    }
}
