//! Shared world state for task status BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::access::Actor;
use taskdesk::persistence::InMemoryStore;
use taskdesk::account::{
    adapters::memory::InMemoryAccountRepository, services::AccountDirectoryService,
};
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskRecordService, TaskServiceError, TaskStatusService},
};

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub accounts: Arc<InMemoryAccountRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub directory: AccountDirectoryService<InMemoryAccountRepository, DefaultClock>,
    pub records: TaskRecordService<InMemoryTaskRepository, InMemoryAccountRepository, DefaultClock>,
    pub statuses: TaskStatusService<InMemoryTaskRepository, DefaultClock>,
    pub admin: Option<Actor>,
    pub staff: HashMap<String, Actor>,
    pub task: Option<Task>,
    pub first_received_at: Option<DateTime<Utc>>,
    pub last_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskStatusWorld {
    /// Creates a world over empty repositories.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let accounts = Arc::new(InMemoryAccountRepository::new(&store));
        let tasks = Arc::new(InMemoryTaskRepository::new(&store));
        let clock = Arc::new(DefaultClock);

        Self {
            directory: AccountDirectoryService::new(Arc::clone(&accounts), Arc::clone(&clock)),
            records: TaskRecordService::new(
                Arc::clone(&tasks),
                Arc::clone(&accounts),
                Arc::clone(&clock),
            ),
            statuses: TaskStatusService::new(Arc::clone(&tasks), clock),
            accounts,
            tasks,
            admin: None,
            staff: HashMap::new(),
            task: None,
            first_received_at: None,
            last_result: None,
        }
    }

    /// Looks up a staff actor created earlier in the scenario.
    pub fn staff_member(&self, username: &str) -> Result<&Actor, eyre::Report> {
        self.staff
            .get(username)
            .ok_or_else(|| eyre::eyre!("unknown staff member {username} in scenario world"))
    }

    /// Returns the scenario task.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
