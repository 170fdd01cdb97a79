//! Repository port for account persistence and lookup.

use crate::account::domain::{Account, AccountId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateAccount`] when the account
    /// ID already exists or [`AccountRepositoryError::DuplicateUsername`] when
    /// the username is taken.
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Persists changes to an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when the account does not
    /// exist or [`AccountRepositoryError::DuplicateUsername`] when the new
    /// username belongs to another account.
    async fn update(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Permanently removes an account and every task assigned to it, as one
    /// atomic write, returning the number of tasks removed.
    ///
    /// Nothing is removed when the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when the account does not
    /// exist.
    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<usize>;

    /// Finds an account by identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>>;

    /// Finds an account by username.
    ///
    /// Returns `None` when no account has the given username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> AccountRepositoryResult<Option<Account>>;

    /// Returns every account ordered by username.
    async fn list_all(&self) -> AccountRepositoryResult<Vec<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// An account with the same identifier already exists.
    #[error("duplicate account identifier: {0}")]
    DuplicateAccount(AccountId),

    /// An account with the same username already exists.
    #[error("username already taken: {0}")]
    DuplicateUsername(Username),

    /// The account was not found.
    #[error("account not found: {0}")]
    NotFound(AccountId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
