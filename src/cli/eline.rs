//! E-Line command definitions and arguments

use clap::{ArgAction, Args, Subcommand};

use super::common::Provider;

/// Verbs for the 'eline' group
#[derive(Subcommand, Debug)]
pub enum ElineCommand {
    /// List all E-Lines
    List,

    /// Show one E-Line by name
    Get {
        /// E-Line name
        name: String,
    },

    /// Fetch statistics for one E-Line
    Stats {
        /// E-Line name
        name: String,
    },

    /// Create or replace an E-Line
    Add(AddElineArgs),

    /// Delete one E-Line by name
    Delete {
        /// E-Line name
        name: String,
    },

    /// Delete every E-Line
    Purge,
}

/// Arguments for 'eline add'
#[derive(Args, Debug)]
pub struct AddElineArgs {
    /// E-Line name
    pub name: String,

    /// Name of the path this E-Line rides on
    pub path_name: String,

    /// Source switch port
    pub source_port: String,

    /// Destination switch port
    pub destination_port: String,

    /// Source VLAN ID (implies network-type vlan)
    #[arg(long)]
    pub source_segmentation_id: Option<u32>,

    /// Destination VLAN ID (implies network-type vlan)
    #[arg(long)]
    pub destination_segmentation_id: Option<u32>,

    /// Ethernet type
    #[arg(long = "ether-type")]
    pub ether_type: Option<String>,

    /// Bidirectional service (pass 'false' for unidirectional)
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub bidirectional: bool,

    /// Provisioning provider
    #[arg(long, value_enum, default_value_t = Provider::Sr)]
    pub provider: Provider,
}
