//! Account aggregate root.

use super::{AccountId, EmailAddress, PasswordHash, PersonName, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Account aggregate root.
///
/// Serialization omits the credential digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: AccountId,
    username: Username,
    email: Option<EmailAddress>,
    first_name: PersonName,
    last_name: PersonName,
    is_active: bool,
    is_administrator: bool,
    #[serde(skip_serializing)]
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated fields for a brand-new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Unique login name.
    pub username: Username,
    /// Optional contact address.
    pub email: Option<EmailAddress>,
    /// Given name.
    pub first_name: PersonName,
    /// Family name.
    pub last_name: PersonName,
    /// Whether the account holds administrator privileges.
    pub is_administrator: bool,
    /// Credential digest from the authentication layer.
    pub password_hash: PasswordHash,
}

/// Validated replacement values for the editable account fields.
///
/// The credential digest is changed by the authentication layer and has no
/// field here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountChanges {
    /// Unique login name.
    pub username: Username,
    /// Optional contact address.
    pub email: Option<EmailAddress>,
    /// Given name.
    pub first_name: PersonName,
    /// Family name.
    pub last_name: PersonName,
    /// Whether the account may sign in and act.
    pub is_active: bool,
    /// Whether the account holds administrator privileges.
    pub is_administrator: bool,
}

/// Parameter object for reconstructing a persisted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAccountData {
    /// Persisted account identifier.
    pub id: AccountId,
    /// Persisted username.
    pub username: Username,
    /// Persisted email address, if any.
    pub email: Option<EmailAddress>,
    /// Persisted given name.
    pub first_name: PersonName,
    /// Persisted family name.
    pub last_name: PersonName,
    /// Persisted active flag.
    pub is_active: bool,
    /// Persisted administrator flag.
    pub is_administrator: bool,
    /// Persisted credential digest.
    pub password_hash: PasswordHash,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new, active account.
    #[must_use]
    pub fn new(data: NewAccount, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AccountId::new(),
            username: data.username,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            is_active: true,
            is_administrator: data.is_administrator,
            password_hash: data.password_hash,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            is_active: data.is_active,
            is_administrator: data.is_administrator,
            password_hash: data.password_hash,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the email address, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the given name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Returns `true` when the account may sign in and act.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns `true` when the account holds administrator privileges.
    #[must_use]
    pub const fn is_administrator(&self) -> bool {
        self.is_administrator
    }

    /// Returns the credential digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the editable fields.
    pub fn apply_changes(&mut self, changes: AccountChanges, clock: &impl Clock) {
        let AccountChanges {
            username,
            email,
            first_name,
            last_name,
            is_active,
            is_administrator,
        } = changes;
        self.username = username;
        self.email = email;
        self.first_name = first_name;
        self.last_name = last_name;
        self.is_active = is_active;
        self.is_administrator = is_administrator;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
