//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username contains characters outside letters, digits and `@.+-_`.
    #[error("username '{0}' may only contain letters, digits and @/./+/-/_")]
    InvalidUsername(String),

    /// The username exceeds the 150-character storage limit.
    #[error("username exceeds 150 character limit: {0}")]
    UsernameTooLong(String),

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// A first or last name exceeds the 150-character storage limit.
    #[error("name exceeds 150 character limit: {0}")]
    NameTooLong(String),

    /// The credential digest supplied by the authentication layer is empty.
    #[error("password digest must not be empty")]
    EmptyPasswordHash,
}
