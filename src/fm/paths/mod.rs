//! Point-to-point path resources

mod api;
mod commands;
mod models;

pub use commands::run_path_command;
pub use models::build_path;

pub(crate) use models::waypoint_list;
