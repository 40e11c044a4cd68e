//! E-Tree service resources

mod api;
mod commands;
mod models;

pub use commands::run_etree_command;
pub use models::{build_etree, build_etree_leaf};
