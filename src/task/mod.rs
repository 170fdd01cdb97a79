//! Task records and the received/completed workflow.
//!
//! Administrators issue tasks to accounts and maintain them; assignees
//! acknowledge receipt and completion through a small, explicit transition
//! table in which un-receiving a task also revokes its completion. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
