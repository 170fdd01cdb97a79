//! Boundary classification shared by every service error.

use std::fmt;

/// Coarse error category used by callers to decide how to present a failure.
///
/// Every service error exposes a `kind()` accessor returning one of these
/// values. None of them is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The actor lacks the required role or ownership.
    PermissionDenied,
    /// A referenced task or account does not exist.
    NotFound,
    /// A field is malformed, missing, or conflicts with a uniqueness rule.
    Validation,
    /// A status change violates the received-before-completed ordering.
    InvalidTransition,
    /// Another writer modified the record between read and write.
    Conflict,
    /// The persistence layer failed or returned unusable data.
    Storage,
}

impl ErrorKind {
    /// Returns a stable lowercase label for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::InvalidTransition => "invalid_transition",
            Self::Conflict => "conflict",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
