//! Account directory for Taskdesk.
//!
//! Accounts are the login-capable actors that receive tasks. Credentials
//! themselves are verified by the hosting framework; this module stores the
//! opaque digest it hands over, together with the profile fields and the
//! active and administrator flags that drive authorization. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
