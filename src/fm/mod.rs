//! Flow Manager API client module
//!
//! This module provides functionality to interact with the Flow Manager
//! RESTCONF API: the controller transport, the generic resource client, and
//! one submodule per entity kind.

mod client;
mod controller;
mod models;

pub mod elines;
pub mod etrees;
pub mod ofnodes;
pub mod paths;
pub mod status;
pub mod taps;
pub mod treepaths;

pub use client::FmClient;
pub use controller::{ConnectionSettings, Controller};
pub use elines::run_eline_command;
pub use etrees::run_etree_command;
pub use models::FmResponse;
pub use ofnodes::run_ofnode_command;
pub use paths::run_path_command;
pub use status::run_controller_command;
pub use taps::run_tap_command;
pub use treepaths::run_treepath_command;
