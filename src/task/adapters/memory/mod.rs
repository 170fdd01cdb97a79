//! In-memory task adapters for tests and single-process embedding.

mod task;

pub use task::InMemoryTaskRepository;
