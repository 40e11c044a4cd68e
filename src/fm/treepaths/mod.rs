//! Point-to-multipoint tree-path resources

mod api;
mod commands;
mod models;

pub use commands::run_treepath_command;
pub use models::{build_treepath, build_treepath_leaf};
