//! Adapter implementations for account persistence.

pub mod memory;
pub mod postgres;
