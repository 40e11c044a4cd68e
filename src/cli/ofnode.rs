//! OpenFlow node command definitions
//!
//! Inventory queries are read-only and always target the operational
//! datastore.

use clap::Subcommand;

/// Verbs for the 'ofnode' group
#[derive(Subcommand, Debug)]
pub enum OfnodeCommand {
    /// List all OpenFlow nodes
    List,

    /// Show one node by id
    Get {
        /// Node id (e.g. openflow:1)
        node: String,
    },

    /// Show one node connector
    Connector {
        /// Node id
        node: String,
        /// Connector id (e.g. openflow:1:2)
        connector: String,
    },

    /// Show traffic statistics for one node connector
    ConnectorStats {
        /// Node id
        node: String,
        /// Connector id
        connector: String,
    },
}
