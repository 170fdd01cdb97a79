//! In-memory account adapters for tests and single-process embedding.

mod account;

pub use account::InMemoryAccountRepository;
