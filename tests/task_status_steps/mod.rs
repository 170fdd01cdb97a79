//! Step definitions for task status workflow scenarios.

pub mod given;
pub mod world;
