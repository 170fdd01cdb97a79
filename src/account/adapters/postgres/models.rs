//! Diesel row models for account persistence.

use super::schema::accounts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Unique login name.
    pub username: String,
    /// Optional contact address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Active flag.
    pub is_active: bool,
    /// Administrator flag.
    pub is_administrator: bool,
    /// Opaque credential digest.
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Unique login name.
    pub username: String,
    /// Optional contact address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Active flag.
    pub is_active: bool,
    /// Administrator flag.
    pub is_administrator: bool,
    /// Opaque credential digest.
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset for the editable account columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = accounts)]
#[diesel(treat_none_as_null = true)]
pub struct AccountChangeset {
    /// Unique login name.
    pub username: String,
    /// Optional contact address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Active flag.
    pub is_active: bool,
    /// Administrator flag.
    pub is_administrator: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
