//! Domain model for task records.
//!
//! The task domain models validated task details, the two-flag workflow
//! status with its timestamps, and the aggregate that ties them together,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod details;
mod error;
mod ids;
mod status;
mod task;

pub use details::{SendingUnit, TaskDetails, TaskTitle, parse_due_timestamp};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use status::{StatusField, TaskStage, TaskStatus};
pub use task::{PersistedTaskData, Task};
