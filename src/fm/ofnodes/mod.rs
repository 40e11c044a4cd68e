//! OpenFlow node inventory resources (read-only)

mod api;
mod commands;

pub use commands::run_ofnode_command;
