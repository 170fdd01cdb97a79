//! Opaque credential digest handed over by the authentication layer.

use super::AccountDomainError;
use std::fmt;

/// Password digest produced and verified by the hosting framework.
///
/// The directory stores the value verbatim and never inspects it. `Debug`
/// output is redacted and the type has no serde implementation, so the
/// digest cannot leak into logs or serialized payloads.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps a digest string.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyPasswordHash`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(AccountDomainError::EmptyPasswordHash);
        }
        Ok(Self(raw))
    }

    /// Returns the digest for handing back to the authentication layer.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
