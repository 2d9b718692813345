//! Widgets read states and computes from the `StateCtx`, render, and
//! dispatch commands. No domain logic lives here.

mod status;
pub mod users;

pub use status::fetch_status;
