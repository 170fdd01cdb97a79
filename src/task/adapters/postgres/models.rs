//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row shape shared by reads, inserts and full-row updates.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub title: String,
    /// Issuing unit.
    pub sending_unit: String,
    /// Assigned account.
    pub assignee_id: uuid::Uuid,
    /// Deadline.
    pub due_at: DateTime<Utc>,
    /// Received flag.
    pub received: bool,
    /// Completed flag.
    pub completed: bool,
    /// When the task was received.
    pub received_at: Option<DateTime<Utc>>,
    /// When the task was completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
