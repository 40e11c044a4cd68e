//! E-Tree command definitions and arguments

use clap::{Args, Subcommand};

use super::common::Provider;

/// Verbs for the 'etree' group
#[derive(Subcommand, Debug)]
pub enum EtreeCommand {
    /// List all E-Trees
    List,

    /// Show one E-Tree by name
    Get {
        /// E-Tree name
        name: String,
    },

    /// Fetch statistics for one E-Tree
    Stats {
        /// E-Tree name
        name: String,
    },

    /// Create or replace an E-Tree
    Add(AddEtreeArgs),

    /// Delete one E-Tree by name
    Delete {
        /// E-Tree name
        name: String,
    },

    /// Delete every E-Tree
    Purge,

    /// Manage leaves of an existing E-Tree
    Leaf {
        #[command(subcommand)]
        command: EtreeLeafCommand,
    },
}

/// Arguments for 'etree add'
#[derive(Args, Debug)]
pub struct AddEtreeArgs {
    /// E-Tree name
    pub name: String,

    /// Name of the tree path this E-Tree rides on
    pub path_name: String,

    /// Root switch port
    pub root_port: String,

    /// Leaf switch port
    pub leaf_port: String,

    /// Root VLAN ID (implies network-type vlan)
    #[arg(long)]
    pub root_segmentation_id: Option<u32>,

    /// Leaf VLAN ID (implies network-type vlan)
    #[arg(long)]
    pub leaf_segmentation_id: Option<u32>,

    /// Ethernet type
    #[arg(long = "ether-type")]
    pub ether_type: Option<String>,

    /// Provisioning provider
    #[arg(long, value_enum, default_value_t = Provider::Sr)]
    pub provider: Provider,
}

/// Leaf sub-resource verbs
#[derive(Subcommand, Debug)]
pub enum EtreeLeafCommand {
    /// Show one leaf of an E-Tree
    Get {
        /// E-Tree name
        name: String,
        /// Leaf node id
        node: String,
    },

    /// Create or replace a leaf on an E-Tree
    Add {
        /// E-Tree name
        name: String,
        /// Leaf node id
        node: String,
        /// Leaf switch port
        switch_port: String,
        /// Leaf VLAN ID (implies network-type vlan)
        #[arg(long)]
        segmentation_id: Option<u32>,
    },

    /// Delete one leaf of an E-Tree
    Delete {
        /// E-Tree name
        name: String,
        /// Leaf node id
        node: String,
    },
}
