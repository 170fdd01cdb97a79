//! Personal name fields.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 150;

/// A first or last name. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Creates a trimmed name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::NameTooLong`] when the trimmed value
    /// exceeds 150 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(AccountDomainError::NameTooLong(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when no name was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
