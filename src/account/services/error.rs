//! Service-level errors for the account directory.

use crate::ErrorKind;
use crate::access::PermissionDenied;
use crate::account::{
    domain::{AccountDomainError, AccountId, Username},
    ports::AccountRepositoryError,
};
use thiserror::Error;

/// Service-level errors for account directory operations.
#[derive(Debug, Error)]
pub enum AccountDirectoryError {
    /// The actor may not perform the operation.
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),
    /// The account does not exist.
    #[error("account not found: {0}")]
    NotFound(AccountId),
    /// The username belongs to another account.
    #[error("username already taken: {0}")]
    UsernameTaken(Username),
    /// Field validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Account repository operation failed.
    #[error(transparent)]
    Repository(AccountRepositoryError),
}

impl AccountDirectoryError {
    /// Classifies the error for presentation at the boundary.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UsernameTaken(_) | Self::Domain(_) => ErrorKind::Validation,
            Self::Repository(_) => ErrorKind::Storage,
        }
    }
}

impl From<AccountRepositoryError> for AccountDirectoryError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::NotFound(id) => Self::NotFound(id),
            AccountRepositoryError::DuplicateUsername(username) => Self::UsernameTaken(username),
            other => Self::Repository(other),
        }
    }
}

/// Result type for account directory operations.
pub type AccountDirectoryResult<T> = Result<T, AccountDirectoryError>;
