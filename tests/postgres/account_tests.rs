//! Account persistence against `PostgreSQL`.

use super::helpers::{BoxError, TestDatabase, TickingClock, database, new_account};
use rstest::rstest;
use taskdesk::account::{
    adapters::postgres::PostgresAccountRepository,
    domain::{
        Account, AccountChanges, AccountId, PersistedAccountData, PersonName, Username,
    },
    ports::{AccountRepository, AccountRepositoryError},
};

fn changes_for(username: &str, is_active: bool) -> Result<AccountChanges, BoxError> {
    Ok(AccountChanges {
        username: Username::new(username)?,
        email: None,
        first_name: PersonName::new("Renamed")?,
        last_name: PersonName::new("Person")?,
        is_active,
        is_administrator: true,
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_account_is_found_by_id_and_username(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let test_database = database.await?;
    let clock = TickingClock::default();
    let repo = PostgresAccountRepository::new(test_database.pool.clone());
    let account = new_account("alice", false, &clock)?;

    repo.store(&account).await?;

    assert_eq!(repo.find_by_id(account.id()).await?, Some(account.clone()));
    assert_eq!(
        repo.find_by_username(&Username::new("alice")?).await?,
        Some(account.clone())
    );
    assert_eq!(
        repo.find_by_id(account.id())
            .await?
            .map(|found| found.password_hash().expose().to_owned()),
        Some("pbkdf2_sha256$1$salt$digest".to_owned())
    );
    assert!(repo.find_by_id(AccountId::new()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_username_and_identifier_are_rejected(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let test_database = database.await?;
    let clock = TickingClock::default();
    let repo = PostgresAccountRepository::new(test_database.pool.clone());
    let original = new_account("alice", false, &clock)?;
    repo.store(&original).await?;

    let namesake = new_account("alice", true, &clock)?;
    let by_name = repo.store(&namesake).await;
    assert!(
        matches!(by_name, Err(AccountRepositoryError::DuplicateUsername(ref name)) if name.as_str() == "alice")
    );

    let same_id = Account::from_persisted(PersistedAccountData {
        id: original.id(),
        username: Username::new("alice2")?,
        email: None,
        first_name: PersonName::default(),
        last_name: PersonName::default(),
        is_active: true,
        is_administrator: false,
        password_hash: original.password_hash().clone(),
        created_at: original.created_at(),
        updated_at: original.updated_at(),
    });
    let by_id = repo.store(&same_id).await;
    assert!(matches!(
        by_id,
        Err(AccountRepositoryError::DuplicateAccount(id)) if id == original.id()
    ));
    assert_eq!(repo.list_all().await?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_changes_and_guards_usernames(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let test_database = database.await?;
    let clock = TickingClock::default();
    let repo = PostgresAccountRepository::new(test_database.pool.clone());
    let mut alice = new_account("alice", false, &clock)?;
    let bob = new_account("bob", false, &clock)?;
    repo.store(&alice).await?;
    repo.store(&bob).await?;

    alice.apply_changes(changes_for("alicia", false)?, &clock);
    repo.update(&alice).await?;
    assert_eq!(repo.find_by_id(alice.id()).await?, Some(alice.clone()));

    let mut clash = alice.clone();
    clash.apply_changes(changes_for("bob", true)?, &clock);
    let result = repo.update(&clash).await;
    assert!(
        matches!(result, Err(AccountRepositoryError::DuplicateUsername(ref name)) if name.as_str() == "bob")
    );

    let ghost = new_account("ghost", false, &clock)?;
    let missing = repo.update(&ghost).await;
    assert!(matches!(missing, Err(AccountRepositoryError::NotFound(id)) if id == ghost.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_orders_by_username_bytes(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let test_database = database.await?;
    let clock = TickingClock::default();
    let repo = PostgresAccountRepository::new(test_database.pool.clone());
    for username in ["carol", "Bob", "alice", "Zed"] {
        repo.store(&new_account(username, false, &clock)?).await?;
    }

    let listed = repo.list_all().await?;

    let names: Vec<&str> = listed.iter().map(|a| a.username().as_str()).collect();
    assert_eq!(names, ["Bob", "Zed", "alice", "carol"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_missing_account_is_not_found(
    #[future] database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let test_database = database.await?;
    let repo = PostgresAccountRepository::new(test_database.pool.clone());
    let missing = AccountId::new();

    let result = repo.delete(missing).await;

    assert!(matches!(result, Err(AccountRepositoryError::NotFound(id)) if id == missing));
    Ok(())
}
