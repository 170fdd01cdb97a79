//! Authorization gate.
//!
//! Every mutating operation starts by consulting one of the predicates in
//! [`gate`] for the resolved [`Actor`]. A false predicate becomes a
//! [`PermissionDenied`] error; presenting that error is left to the caller.

mod actor;
mod error;
pub mod gate;

pub use actor::Actor;
pub use error::{GuardedAction, PermissionDenied};
pub use gate::{
    can_manage_account, can_manage_accounts, can_manage_tasks, can_toggle_status,
    can_view_task, require,
};
