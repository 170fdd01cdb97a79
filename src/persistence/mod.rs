//! Storage shared by both contexts: `PostgreSQL` schema bootstrap, connection
//! pooling, and the in-memory tables behind the memory adapters.

mod memory;

pub use memory::InMemoryStore;

use crate::config::DatabaseConfig;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::result::QueryResult;

/// Shared `PostgreSQL` connection pool type.
///
/// The per-context pool aliases (`AccountPgPool`, `TaskPgPool`) name this
/// same type, so one pool can back every repository.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// DDL creating the account and task tables.
///
/// Every statement is guarded with `IF NOT EXISTS`, so applying it to an
/// already-initialized database is harmless.
pub const SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_accounts_and_tasks/up.sql");

/// Creates the account and task tables when they are missing.
///
/// # Errors
///
/// Returns the Diesel error raised by the first failing statement.
pub fn apply_schema(connection: &mut PgConnection) -> QueryResult<()> {
    connection.batch_execute(SCHEMA_SQL)
}

/// Builds a connection pool for the configured database.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot open its initial connections.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
}
