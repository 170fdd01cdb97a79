//! `PostgreSQL` repository implementation for accounts.

use super::{
    models::{AccountChangeset, AccountRow, NewAccountRow},
    schema::accounts,
};
use crate::account::{
    domain::{
        Account, AccountId, EmailAddress, PasswordHash, PersistedAccountData, PersonName,
        Username,
    },
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use crate::task::adapters::postgres::schema::tasks;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed account repository.
///
/// Deleting an account removes its tasks in the same transaction; the
/// `ON DELETE CASCADE` foreign key covers rows written outside this crate.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: AccountPgPool,
}

impl PostgresAccountRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AccountPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AccountRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountRepositoryError::persistence)?
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()> {
        let account_id = account.id();
        let username = account.username().clone();
        let new_row = to_new_row(account);

        self.run_blocking(move |connection| {
            diesel::insert_into(accounts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_username_unique_violation(info.as_ref()) =>
                    {
                        AccountRepositoryError::DuplicateUsername(username.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AccountRepositoryError::DuplicateAccount(account_id)
                    }
                    _ => AccountRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let account_id = account.id();
        let username = account.username().clone();
        let changeset = to_changeset(account);

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(accounts::table.filter(accounts::id.eq(account_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                            if is_username_unique_violation(info.as_ref()) =>
                        {
                            AccountRepositoryError::DuplicateUsername(username.clone())
                        }
                        _ => AccountRepositoryError::persistence(err),
                    })?;

            if updated_count == 0 {
                return Err(AccountRepositoryError::NotFound(account_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx_conn| {
                    let removed_tasks =
                        diesel::delete(tasks::table.filter(tasks::assignee_id.eq(id.into_inner())))
                            .execute(tx_conn)?;
                    let deleted_count =
                        diesel::delete(accounts::table.filter(accounts::id.eq(id.into_inner())))
                            .execute(tx_conn)?;
                    if deleted_count == 0 {
                        return Err(DieselError::NotFound);
                    }
                    Ok(removed_tasks)
                })
                .map_err(|err| match err {
                    DieselError::NotFound => AccountRepositoryError::NotFound(id),
                    _ => AccountRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::id.eq(id.into_inner()))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> AccountRepositoryResult<Option<Account>> {
        let lookup = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::username.eq(&lookup))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn list_all(&self) -> AccountRepositoryResult<Vec<Account>> {
        self.run_blocking(move |connection| {
            let rows = accounts::table
                .order(accounts::username.asc())
                .select(AccountRow::as_select())
                .load::<AccountRow>(connection)
                .map_err(AccountRepositoryError::persistence)?;
            rows.into_iter().map(row_to_account).collect()
        })
        .await
    }
}

fn to_new_row(account: &Account) -> NewAccountRow {
    NewAccountRow {
        id: account.id().into_inner(),
        username: account.username().as_str().to_owned(),
        email: account.email().map(|email| email.as_str().to_owned()),
        first_name: account.first_name().as_str().to_owned(),
        last_name: account.last_name().as_str().to_owned(),
        is_active: account.is_active(),
        is_administrator: account.is_administrator(),
        password_hash: account.password_hash().expose().to_owned(),
        created_at: account.created_at(),
        updated_at: account.updated_at(),
    }
}

fn to_changeset(account: &Account) -> AccountChangeset {
    AccountChangeset {
        username: account.username().as_str().to_owned(),
        email: account.email().map(|email| email.as_str().to_owned()),
        first_name: account.first_name().as_str().to_owned(),
        last_name: account.last_name().as_str().to_owned(),
        is_active: account.is_active(),
        is_administrator: account.is_administrator(),
        updated_at: account.updated_at(),
    }
}

fn row_to_account(row: AccountRow) -> AccountRepositoryResult<Account> {
    let AccountRow {
        id,
        username,
        email,
        first_name,
        last_name,
        is_active,
        is_administrator,
        password_hash,
        created_at,
        updated_at,
    } = row;

    let data = PersistedAccountData {
        id: AccountId::from_uuid(id),
        username: Username::new(username).map_err(AccountRepositoryError::invalid_persisted_data)?,
        email: email
            .map(EmailAddress::new)
            .transpose()
            .map_err(AccountRepositoryError::invalid_persisted_data)?,
        first_name: PersonName::new(first_name)
            .map_err(AccountRepositoryError::invalid_persisted_data)?,
        last_name: PersonName::new(last_name)
            .map_err(AccountRepositoryError::invalid_persisted_data)?,
        is_active,
        is_administrator,
        password_hash: PasswordHash::new(password_hash)
            .map_err(AccountRepositoryError::invalid_persisted_data)?,
        created_at,
        updated_at,
    };
    Ok(Account::from_persisted(data))
}

fn is_username_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "accounts_username_unique")
}
