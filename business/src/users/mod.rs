//! Users administration domain.
//!
//! This module is the single home for the users screen's state, computes,
//! commands, SCIM API helpers, and the presentation policy. UI code under
//! `ui/src/widgets/**` defines no domain logic: it reads computes via
//! `ctx.cached::<T>()` and triggers changes via `ctx.dispatch::<Cmd>()`.

pub mod action_compute;
pub mod api;
pub mod list_compute;
pub mod model;
pub mod page_state;
pub mod policy;

pub use action_compute::{
    DeleteUserCommand, DeleteUserInput, ResetUsersActionCommand, UserActionKind, UserActionState,
    UsersActionCompute,
};
pub use list_compute::{RefreshUsersCommand, UsersListCompute, UsersListResult};
pub use model::{PRIMARY_USER_STORE, UserOrigin, UserRecord};
pub use page_state::{EditNavigation, PendingDelete, UsersPageState};
