//! Domain logic for the identity console.
//!
//! Everything the users screen knows lives here: configuration, the HTTP
//! layer, SCIM API helpers, states/computes/commands, and the presentation
//! policy that derives table columns and row actions. The `ui` crate stays
//! dumb: it reads state, renders, and dispatches commands.

pub mod config;
pub mod http;
pub mod session;
pub mod users;

pub use config::ConsoleConfig;
pub use session::SessionState;
