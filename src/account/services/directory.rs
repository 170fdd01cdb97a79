//! Account directory orchestration.

use super::{
    AccountDirectoryError, AccountDirectoryResult, BootstrapAdministratorRequest,
    CreateAccountRequest, UpdateAccountRequest,
};
use crate::access::{self, Actor, GuardedAction, PermissionDenied};
use crate::account::{
    domain::{Account, AccountId},
    ports::AccountRepository,
};
use mockable::Clock;
use std::sync::Arc;

/// Account directory orchestration service.
#[derive(Clone)]
pub struct AccountDirectoryService<A, C>
where
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    accounts: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> AccountDirectoryService<A, C>
where
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new account directory service.
    #[must_use]
    pub const fn new(accounts: Arc<A>, clock: Arc<C>) -> Self {
        Self { accounts, clock }
    }

    /// Resolves the actor for an authenticated account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::NotFound`] when the account does not
    /// exist and [`AccountDirectoryError::PermissionDenied`] when it is
    /// inactive.
    pub async fn resolve_actor(&self, id: AccountId) -> AccountDirectoryResult<Actor> {
        let account = self.load(id).await?;
        if !account.is_active() {
            tracing::warn!(account_id = %id, "inactive account refused");
            return Err(PermissionDenied {
                actor: id,
                action: GuardedAction::Act,
            }
            .into());
        }
        Ok(Actor::from(&account))
    }

    /// Lists every account except the actor's own, ordered by username.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::PermissionDenied`] for
    /// non-administrators.
    pub async fn list_manageable(&self, actor: &Actor) -> AccountDirectoryResult<Vec<Account>> {
        access::require(
            access::can_manage_accounts(actor),
            actor,
            GuardedAction::ManageAccounts,
        )?;
        let accounts = self.accounts.list_all().await?;
        Ok(accounts
            .into_iter()
            .filter(|account| account.id() != actor.id())
            .collect())
    }

    /// Retrieves an account the actor may manage.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::PermissionDenied`] for
    /// non-administrators and for the actor's own account, and
    /// [`AccountDirectoryError::NotFound`] when the account does not exist.
    pub async fn find_manageable(
        &self,
        id: AccountId,
        actor: &Actor,
    ) -> AccountDirectoryResult<Account> {
        access::require(
            access::can_manage_account(actor, id),
            actor,
            GuardedAction::ManageAccount(id),
        )?;
        self.load(id).await
    }

    /// Creates an active account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::PermissionDenied`] for
    /// non-administrators, [`AccountDirectoryError::Domain`] for invalid
    /// fields, and [`AccountDirectoryError::UsernameTaken`] when the username
    /// is in use.
    pub async fn create(
        &self,
        request: CreateAccountRequest,
        actor: &Actor,
    ) -> AccountDirectoryResult<Account> {
        access::require(
            access::can_manage_accounts(actor),
            actor,
            GuardedAction::ManageAccounts,
        )?;
        let account = Account::new(request.validate()?, &*self.clock);
        self.accounts.store(&account).await?;
        tracing::info!(
            account_id = %account.id(),
            username = %account.username(),
            actor = %actor.id(),
            "account created"
        );
        Ok(account)
    }

    /// Replaces the editable fields of another account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::PermissionDenied`] for
    /// non-administrators and for the actor's own account,
    /// [`AccountDirectoryError::NotFound`] when the account does not exist,
    /// and the same validation errors as [`Self::create`].
    pub async fn update(
        &self,
        id: AccountId,
        request: UpdateAccountRequest,
        actor: &Actor,
    ) -> AccountDirectoryResult<Account> {
        access::require(
            access::can_manage_account(actor, id),
            actor,
            GuardedAction::ManageAccount(id),
        )?;
        let mut account = self.load(id).await?;
        account.apply_changes(request.validate()?, &*self.clock);
        self.accounts.update(&account).await?;
        tracing::info!(account_id = %id, actor = %actor.id(), "account updated");
        Ok(account)
    }

    /// Removes another account together with every task assigned to it.
    ///
    /// The repository performs both removals as one write, so a failure
    /// leaves the account and its tasks in place.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::PermissionDenied`] for
    /// non-administrators and for the actor's own account, and
    /// [`AccountDirectoryError::NotFound`] when the account does not exist.
    pub async fn delete(&self, id: AccountId, actor: &Actor) -> AccountDirectoryResult<()> {
        access::require(
            access::can_manage_account(actor, id),
            actor,
            GuardedAction::ManageAccount(id),
        )?;
        let removed_tasks = self.accounts.delete(id).await?;
        tracing::info!(
            account_id = %id,
            removed_tasks,
            actor = %actor.id(),
            "account deleted"
        );
        Ok(())
    }

    /// Creates the first administrator unless the username is already taken.
    ///
    /// Returns `true` when an account was created and `false` when an
    /// account with the requested username already exists, whatever its
    /// role.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::Domain`] for invalid fields or a
    /// repository error when persistence fails.
    pub async fn ensure_administrator(
        &self,
        request: BootstrapAdministratorRequest,
    ) -> AccountDirectoryResult<bool> {
        let new_account = request.validate()?;
        if let Some(existing) = self.accounts.find_by_username(&new_account.username).await? {
            tracing::info!(
                account_id = %existing.id(),
                username = %existing.username(),
                "administrator bootstrap skipped, username exists"
            );
            return Ok(false);
        }

        let account = Account::new(new_account, &*self.clock);
        self.accounts.store(&account).await?;
        tracing::info!(
            account_id = %account.id(),
            username = %account.username(),
            "administrator account created"
        );
        Ok(true)
    }

    async fn load(&self, id: AccountId) -> AccountDirectoryResult<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or(AccountDirectoryError::NotFound(id))
    }
}
