//! E-Line tap resources
//!
//! Taps live under an E-Line endpoint, so every operation is scoped by the
//! owning E-Line name and endpoint.

mod api;
mod commands;
mod models;

pub use commands::run_tap_command;
pub use models::build_tap;
