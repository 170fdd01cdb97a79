//! Domain model for the account directory.
//!
//! Account values are validated on construction so that services and
//! adapters only ever handle well-formed usernames, email addresses and
//! names.

mod account;
mod credential;
mod email;
mod error;
mod ids;
mod profile;
mod username;

pub use account::{Account, AccountChanges, NewAccount, PersistedAccountData};
pub use credential::PasswordHash;
pub use email::EmailAddress;
pub use error::AccountDomainError;
pub use ids::AccountId;
pub use profile::PersonName;
pub use username::Username;
