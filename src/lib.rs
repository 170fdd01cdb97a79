//! Taskdesk: internal task-assignment tracking.
//!
//! An organization issues work items to staff accounts, staff acknowledge
//! and complete them, and administrators manage both the work items and the
//! accounts that may receive them. Authentication, sessions, credential
//! hashing and HTTP routing belong to the hosting web framework; this crate
//! owns the data model and the rules that govern it.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Authorization-checked orchestration over the ports
//!
//! # Modules
//!
//! - [`access`]: Actors and the authorization predicates
//! - [`account`]: Account directory
//! - [`task`]: Task records and the received/completed workflow
//! - [`config`]: Environment-driven configuration
//! - [`persistence`]: Schema bootstrap and connection pooling

pub mod access;
pub mod account;
pub mod config;
mod error;
pub mod persistence;
pub mod task;


pub use error::ErrorKind;
