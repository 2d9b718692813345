//! Typed state storage for the console UI.
//!
//! The crate provides the small framework the `business` and `ui` crates are
//! built on:
//!
//! - [`State`]: plain typed values owned by a [`StateCtx`] (config, view
//!   state, command inputs). UI code reads and mutates them synchronously.
//! - [`Compute`]: compute-shaped caches holding the latest result of an
//!   async operation. Commands update them through an [`Updater`]; UI reads
//!   them via `ctx.cached::<T>()`.
//! - [`Command`]: manual-only units of async work (network IO). A command
//!   receives a [`CommandSnapshot`] of the states/computes it depends on and
//!   publishes results back with `updater.set(..)`. The context applies
//!   pending updates on the next `sync_computes()` call, once per frame.
//!
//! Everything is single-threaded from the UI's perspective: commands run on
//! a background executor, but their results are only observed after the UI
//! thread drains the update channel.

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod time;

pub use command::{Command, Updater};
pub use compute::{Compute, compute_assign_impl};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use time::Time;
