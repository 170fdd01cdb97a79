//! Application services for task records and their workflow.

mod error;
mod records;
mod status;

pub use error::{TaskServiceError, TaskServiceResult};
pub use records::{TaskDetailsRequest, TaskRecordService};
pub use status::{SetStatusRequest, TaskStatusService};
