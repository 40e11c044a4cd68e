//! E-Line service resources

mod api;
mod commands;
mod models;

pub use commands::run_eline_command;
pub use models::build_eline;

pub(crate) use models::endpoint;
