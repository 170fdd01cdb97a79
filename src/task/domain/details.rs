//! Validated descriptive fields of a task.

use super::TaskDomainError;
use crate::account::domain::AccountId;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_TITLE_LENGTH: usize = 255;
const MAX_SENDING_UNIT_LENGTH: usize = 100;

/// Naive formats accepted for due timestamps, interpreted as UTC.
///
/// The first two match what an HTML `datetime-local` input submits.
const NAIVE_DUE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Human-readable name of a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated, trimmed title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming or [`TaskDomainError::TitleTooLong`] when it exceeds 255
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if normalized.chars().count() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Organizational unit that issued a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SendingUnit(String);

impl SendingUnit {
    /// Creates a validated, trimmed sending unit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySendingUnit`] when the value is empty
    /// after trimming or [`TaskDomainError::SendingUnitTooLong`] when it
    /// exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptySendingUnit);
        }
        if normalized.chars().count() > MAX_SENDING_UNIT_LENGTH {
            return Err(TaskDomainError::SendingUnitTooLong(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the sending unit as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SendingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a due timestamp as submitted by a form.
///
/// RFC 3339 values keep their offset and are converted to UTC; naive values
/// such as `2025-01-10T09:00` are taken to be UTC already.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueTimestamp`] when no accepted format
/// matches.
pub fn parse_due_timestamp(raw: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_DUE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TaskDomainError::InvalidDueTimestamp(raw.to_owned()))
}

/// Administrator-editable fields of a task, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// Task name.
    pub title: TaskTitle,
    /// Issuing unit.
    pub sending_unit: SendingUnit,
    /// Account the task is delegated to.
    pub assignee: AccountId,
    /// Deadline for returning the result.
    pub due_at: DateTime<Utc>,
}
