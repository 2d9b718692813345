//! The users administration screen.

pub mod modals;
pub mod panel;
pub mod table;

pub use panel::users_panel;
