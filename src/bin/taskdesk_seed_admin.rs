//! Prepares a Taskdesk database and its first administrator.
//!
//! Usage:
//!
//! ```text
//! taskdesk_seed_admin
//! ```
//!
//! Configuration comes from the environment (see [`taskdesk::config`]).
//! `DATABASE_URL` and `TASKDESK_ADMIN_PASSWORD_HASH` are required; the
//! digest must already be in the format the authentication layer verifies.
//! Running the command again is harmless: the schema is created only when
//! missing and an existing account with the configured username is left
//! untouched.

use std::sync::Arc;

use mockable::DefaultClock;
use taskdesk::account::{
    adapters::postgres::PostgresAccountRepository,
    services::{AccountDirectoryError, AccountDirectoryService, BootstrapAdministratorRequest},
};
use taskdesk::config::{ConfigError, TaskdeskConfig};
use taskdesk::persistence::{self, PgPool};
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
enum SeedError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid log filter: {0}")]
    LogFilter(#[source] tracing_subscriber::filter::ParseError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("database connection failed: {0}")]
    Connect(#[source] diesel::r2d2::PoolError),
    #[error("schema setup failed: {0}")]
    Schema(#[source] BoxError),
    #[error("administrator bootstrap failed: {0}")]
    Bootstrap(#[from] AccountDirectoryError),
}

fn main() -> Result<(), BoxError> {
    run().map_err(Into::into)
}

fn run() -> Result<(), SeedError> {
    let config = TaskdeskConfig::from_env()?;
    init_tracing(&config.log_filter)?;
    let password_hash = config.admin.require_password_hash()?.to_owned();

    let pool = persistence::connect(&config.database).map_err(SeedError::Connect)?;
    let runtime = build_runtime()?;
    runtime.block_on(async {
        apply_schema(pool.clone()).await?;

        let service = AccountDirectoryService::new(
            Arc::new(PostgresAccountRepository::new(pool)),
            Arc::new(DefaultClock),
        );
        let created = service
            .ensure_administrator(BootstrapAdministratorRequest::new(
                config.admin.username.as_str(),
                config.admin.email.as_str(),
                password_hash,
            ))
            .await?;
        if !created {
            tracing::info!(
                username = %config.admin.username,
                "nothing to do, administrator username already exists"
            );
        }
        Ok(())
    })
}

fn init_tracing(filter: &str) -> Result<(), SeedError> {
    let env_filter = EnvFilter::try_new(filter).map_err(SeedError::LogFilter)?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

fn build_runtime() -> Result<tokio::runtime::Runtime, SeedError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(SeedError::RuntimeInit)
}

async fn apply_schema(pool: PgPool) -> Result<(), SeedError> {
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut connection = pool.get()?;
        persistence::apply_schema(&mut connection)?;
        Ok(())
    })
    .await
    .map_err(|err| SeedError::Schema(err.into()))?
    .map_err(SeedError::Schema)?;
    tracing::info!("database schema ready");
    Ok(())
}
