//! Validated email address type.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address, matching the `VARCHAR(254)` column.
const MAX_EMAIL_LENGTH: usize = 254;

/// Contact address of an account.
///
/// Only the shape `local@domain` is checked; deliverability is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidEmail`] unless the trimmed value
    /// contains exactly one `@` separating non-empty parts, has no
    /// whitespace, and fits in 254 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        let is_valid = match normalized.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !normalized.chars().any(char::is_whitespace)
                    && normalized.chars().count() <= MAX_EMAIL_LENGTH
            }
            None => false,
        };

        if !is_valid {
            return Err(AccountDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
