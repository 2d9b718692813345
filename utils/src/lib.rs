//! Shared utilities for the console workspace.

pub mod humanize;

pub use humanize::humanize_date_difference;
