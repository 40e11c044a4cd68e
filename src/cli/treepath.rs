//! Tree-path command definitions and arguments

use clap::{Args, Subcommand};

use super::common::Provider;

/// Verbs for the 'treepath' group
#[derive(Subcommand, Debug)]
pub enum TreepathCommand {
    /// List all tree paths
    List,

    /// Show one tree path by name
    Get {
        /// Tree path name
        name: String,
    },

    /// Create or replace a tree path
    Add(AddTreepathArgs),

    /// Delete one tree path by name
    Delete {
        /// Tree path name
        name: String,
    },

    /// Delete every tree path
    Purge,

    /// Manage leaves of an existing tree path
    Leaf {
        #[command(subcommand)]
        command: TreepathLeafCommand,
    },
}

/// Arguments for 'treepath add'
#[derive(Args, Debug)]
pub struct AddTreepathArgs {
    /// Tree path name
    pub name: String,

    /// Root switch node id
    pub root_switch: String,

    /// Leaf switch node id
    pub leaf_switch: String,

    /// Ordered waypoint node id for the leaf (repeatable)
    #[arg(long = "waypoints")]
    pub waypoints: Vec<String>,

    /// Provisioning provider
    #[arg(long, value_enum, default_value_t = Provider::Sr)]
    pub provider: Provider,
}

/// Leaf sub-resource verbs
#[derive(Subcommand, Debug)]
pub enum TreepathLeafCommand {
    /// Show one leaf of a tree path
    Get {
        /// Tree path name
        name: String,
        /// Leaf node id
        node: String,
    },

    /// Create or replace a leaf on a tree path
    Add {
        /// Tree path name
        name: String,
        /// Leaf node id
        node: String,
        /// Ordered waypoint node id constraint (repeatable)
        #[arg(long = "waypoints")]
        waypoints: Vec<String>,
    },

    /// Delete one leaf of a tree path
    Delete {
        /// Tree path name
        name: String,
        /// Leaf node id
        node: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: TreepathCommand,
    }

    #[test]
    fn test_add_parsing() {
        let cli = TestCli::parse_from([
            "test",
            "add",
            "t1",
            "openflow:1",
            "openflow:3",
            "--waypoints",
            "openflow:2",
        ]);
        match cli.command {
            TreepathCommand::Add(args) => {
                assert_eq!(args.root_switch, "openflow:1");
                assert_eq!(args.leaf_switch, "openflow:3");
                assert_eq!(args.waypoints, vec!["openflow:2"]);
            }
            _ => panic!("Expected add"),
        }
    }

    #[test]
    fn test_leaf_add_parsing() {
        let cli = TestCli::parse_from(["test", "leaf", "add", "t1", "openflow:5"]);
        match cli.command {
            TreepathCommand::Leaf {
                command: TreepathLeafCommand::Add { name, node, waypoints },
            } => {
                assert_eq!(name, "t1");
                assert_eq!(node, "openflow:5");
                assert!(waypoints.is_empty());
            }
            _ => panic!("Expected leaf add"),
        }
    }

    #[test]
    fn test_leaf_delete_parsing() {
        let cli = TestCli::parse_from(["test", "leaf", "delete", "t1", "openflow:5"]);
        match cli.command {
            TreepathCommand::Leaf {
                command: TreepathLeafCommand::Delete { name, node },
            } => {
                assert_eq!(name, "t1");
                assert_eq!(node, "openflow:5");
            }
            _ => panic!("Expected leaf delete"),
        }
    }
}
