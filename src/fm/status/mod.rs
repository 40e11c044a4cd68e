//! Controller status queries

mod api;
mod commands;

pub use commands::run_controller_command;
