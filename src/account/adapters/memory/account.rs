//! In-memory repository for accounts.

use async_trait::async_trait;

use crate::account::{
    domain::{Account, AccountId, Username},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use crate::persistence::InMemoryStore;

/// Thread-safe in-memory account repository.
///
/// Deleting an account removes its tasks from the same store in one step.
#[derive(Debug, Clone)]
pub struct InMemoryAccountRepository {
    store: InMemoryStore,
}

impl InMemoryAccountRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: &InMemoryStore) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut tables = self
            .store
            .write()
            .map_err(AccountRepositoryError::persistence)?;

        if tables.accounts.contains_key(&account.id()) {
            return Err(AccountRepositoryError::DuplicateAccount(account.id()));
        }

        if tables.usernames.contains_key(account.username()) {
            return Err(AccountRepositoryError::DuplicateUsername(
                account.username().clone(),
            ));
        }

        tables
            .usernames
            .insert(account.username().clone(), account.id());
        tables.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut tables = self
            .store
            .write()
            .map_err(AccountRepositoryError::persistence)?;

        let old_username = tables
            .accounts
            .get(&account.id())
            .ok_or(AccountRepositoryError::NotFound(account.id()))?
            .username()
            .clone();

        if *account.username() != old_username {
            if let Some(&indexed_id) = tables.usernames.get(account.username())
                && indexed_id != account.id()
            {
                return Err(AccountRepositoryError::DuplicateUsername(
                    account.username().clone(),
                ));
            }
            tables.usernames.remove(&old_username);
            tables
                .usernames
                .insert(account.username().clone(), account.id());
        }

        tables.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<usize> {
        let mut tables = self
            .store
            .write()
            .map_err(AccountRepositoryError::persistence)?;
        tables
            .remove_account(id)
            .ok_or(AccountRepositoryError::NotFound(id))
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        let tables = self
            .store
            .read()
            .map_err(AccountRepositoryError::persistence)?;
        Ok(tables.accounts.get(&id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> AccountRepositoryResult<Option<Account>> {
        let tables = self
            .store
            .read()
            .map_err(AccountRepositoryError::persistence)?;
        let account = tables
            .usernames
            .get(username)
            .and_then(|id| tables.accounts.get(id))
            .cloned();
        Ok(account)
    }

    async fn list_all(&self) -> AccountRepositoryResult<Vec<Account>> {
        let tables = self
            .store
            .read()
            .map_err(AccountRepositoryError::persistence)?;
        let mut accounts: Vec<Account> = tables.accounts.values().cloned().collect();
        accounts.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(accounts)
    }
}
