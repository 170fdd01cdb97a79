//! Request payloads accepted by the account directory.

use super::AccountDirectoryResult;
use crate::account::domain::{
    AccountChanges, EmailAddress, NewAccount, PasswordHash, PersonName, Username,
};

/// Request payload for creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    username: String,
    email: Option<String>,
    first_name: String,
    last_name: String,
    is_administrator: bool,
    password_hash: String,
}

impl CreateAccountRequest {
    /// Creates a request for a regular account with an empty profile.
    #[must_use]
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            first_name: String::new(),
            last_name: String::new(),
            is_administrator: false,
            password_hash: password_hash.into(),
        }
    }

    /// Sets the contact address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the given and family names.
    #[must_use]
    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Grants or withholds administrator privileges.
    #[must_use]
    pub const fn with_administrator(mut self, is_administrator: bool) -> Self {
        self.is_administrator = is_administrator;
        self
    }

    pub(super) fn validate(self) -> AccountDirectoryResult<NewAccount> {
        Ok(NewAccount {
            username: Username::new(self.username)?,
            email: self.email.map(EmailAddress::new).transpose()?,
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            is_administrator: self.is_administrator,
            password_hash: PasswordHash::new(self.password_hash)?,
        })
    }
}

/// Request payload replacing the editable fields of an account.
///
/// Every field is replaced, so callers submit the complete form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAccountRequest {
    username: String,
    email: Option<String>,
    first_name: String,
    last_name: String,
    is_active: bool,
    is_administrator: bool,
}

impl UpdateAccountRequest {
    /// Creates a request for an active, non-administrator account with an
    /// empty profile.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
            is_administrator: false,
        }
    }

    /// Sets the contact address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the given and family names.
    #[must_use]
    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the administrator flag.
    #[must_use]
    pub const fn with_administrator(mut self, is_administrator: bool) -> Self {
        self.is_administrator = is_administrator;
        self
    }

    pub(super) fn validate(self) -> AccountDirectoryResult<AccountChanges> {
        Ok(AccountChanges {
            username: Username::new(self.username)?,
            email: self.email.map(EmailAddress::new).transpose()?,
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            is_active: self.is_active,
            is_administrator: self.is_administrator,
        })
    }
}

/// Request payload for the first administrator account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdministratorRequest {
    username: String,
    email: String,
    password_hash: String,
}

impl BootstrapAdministratorRequest {
    /// Creates a bootstrap request.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub(super) fn validate(self) -> AccountDirectoryResult<NewAccount> {
        Ok(NewAccount {
            username: Username::new(self.username)?,
            email: Some(EmailAddress::new(self.email)?),
            first_name: PersonName::default(),
            last_name: PersonName::default(),
            is_administrator: true,
            password_hash: PasswordHash::new(self.password_hash)?,
        })
    }
}
