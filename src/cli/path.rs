//! Path command definitions and arguments

use clap::{Args, Subcommand};

use super::common::Provider;

/// Verbs for the 'path' group
#[derive(Subcommand, Debug)]
pub enum PathCommand {
    /// List all paths
    List,

    /// Show one path by name
    Get {
        /// Path name
        name: String,
    },

    /// Create or replace a path
    Add(AddPathArgs),

    /// Delete one path by name
    Delete {
        /// Path name
        name: String,
    },

    /// Delete every path
    Purge,
}

/// Arguments for 'path add'
#[derive(Args, Debug)]
pub struct AddPathArgs {
    /// Path name
    pub name: String,

    /// Source switch node id
    pub source_switch: String,

    /// Destination switch node id
    pub destination_switch: String,

    /// Ordered waypoint node id (repeatable)
    #[arg(long = "waypoints")]
    pub waypoints: Vec<String>,

    /// Provisioning provider
    #[arg(long, value_enum, default_value_t = Provider::Sr)]
    pub provider: Provider,
}
