//! CLI argument parsing

mod common;
mod controller;
mod eline;
mod etree;
mod ofnode;
mod path;
mod tap;
mod treepath;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::Provider;
pub use controller::ControllerCommand;
pub use eline::{AddElineArgs, ElineCommand};
pub use etree::{AddEtreeArgs, EtreeCommand, EtreeLeafCommand};
pub use ofnode::OfnodeCommand;
pub use path::{AddPathArgs, PathCommand};
pub use tap::TapCommand;
pub use treepath::{AddTreepathArgs, TreepathCommand, TreepathLeafCommand};

/// Flow Manager CLI
#[derive(Parser, Debug)]
#[command(name = "lfm")]
#[command(version)]
#[command(about = "Manage Flow Manager network paths and services", long_about = None)]
pub struct Cli {
    /// Topology descriptor file with controller connection details
    #[arg(long, global = true)]
    pub topology: Option<PathBuf>,

    /// Do not verify HTTPS certificates
    #[arg(long, global = true, default_value_t = false)]
    pub insecure: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand group per entity kind
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Point-to-point paths
    Path {
        #[command(subcommand)]
        command: PathCommand,
    },

    /// Point-to-multipoint tree paths
    Treepath {
        #[command(subcommand)]
        command: TreepathCommand,
    },

    /// E-Line services
    Eline {
        #[command(subcommand)]
        command: ElineCommand,
    },

    /// E-Tree services
    Etree {
        #[command(subcommand)]
        command: EtreeCommand,
    },

    /// Taps on E-Line endpoints
    Tap {
        #[command(subcommand)]
        command: TapCommand,
    },

    /// OpenFlow inventory nodes (read-only)
    Ofnode {
        #[command(subcommand)]
        command: OfnodeCommand,
    },

    /// Controller queries
    Controller {
        #[command(subcommand)]
        command: ControllerCommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let cli = Cli::parse_from(["lfm", "path", "list"]);
        assert!(cli.topology.is_none());
        assert!(!cli.insecure);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["lfm", "path", "list", "--insecure", "-l", "debug"]);
        assert!(cli.insecure);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_topology_flag() {
        let cli = Cli::parse_from(["lfm", "--topology", "topo.yml", "eline", "list"]);
        assert_eq!(cli.topology.unwrap().to_str(), Some("topo.yml"));
    }

    #[test]
    fn test_path_get_parsing() {
        let cli = Cli::parse_from(["lfm", "path", "get", "p1"]);
        match cli.command {
            Command::Path {
                command: PathCommand::Get { name },
            } => assert_eq!(name, "p1"),
            _ => panic!("Expected path get"),
        }
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["lfm"]).is_err());
        assert!(Cli::try_parse_from(["lfm", "path"]).is_err());
    }
}
