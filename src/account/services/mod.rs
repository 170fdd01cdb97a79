//! Application services for the account directory.

mod directory;
mod error;
mod requests;

pub use directory::AccountDirectoryService;
pub use error::{AccountDirectoryError, AccountDirectoryResult};
pub use requests::{BootstrapAdministratorRequest, CreateAccountRequest, UpdateAccountRequest};
