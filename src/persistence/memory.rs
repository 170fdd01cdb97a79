//! In-memory tables shared by the account and task adapters.
//!
//! Both memory adapters lock the same tables, so an account removal and the
//! removal of its tasks are observed together, and a task is never stored
//! against an account that another writer has just removed.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::account::domain::{Account, AccountId, Username};
use crate::task::domain::{Task, TaskId};

/// Handle to one set of in-memory tables.
///
/// Clones share the same tables. Build the account and task adapters from the
/// same store to get the relational behaviour of the `PostgreSQL` schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<MemoryTables>>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryTables {
    pub(crate) accounts: HashMap<AccountId, Account>,
    pub(crate) usernames: HashMap<Username, AccountId>,
    pub(crate) tasks: HashMap<TaskId, Task>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, MemoryTables>, std::io::Error> {
        self.tables
            .read()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryTables>, std::io::Error> {
        self.tables
            .write()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }
}

impl MemoryTables {
    /// Removes the account and every task assigned to it, returning the number
    /// of tasks removed.
    pub(crate) fn remove_account(&mut self, id: AccountId) -> Option<usize> {
        let removed = self.accounts.remove(&id)?;
        self.usernames.remove(removed.username());
        let before = self.tasks.len();
        self.tasks.retain(|_, task| task.assignee() != id);
        Some(before.saturating_sub(self.tasks.len()))
    }
}
