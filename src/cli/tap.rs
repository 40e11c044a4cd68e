//! Tap command definitions and arguments
//!
//! Taps are scoped under an E-Line name and endpoint, so every verb takes
//! those two arguments first.

use clap::Subcommand;

/// Verbs for the 'tap' group
#[derive(Subcommand, Debug)]
pub enum TapCommand {
    /// List taps on an E-Line endpoint
    List {
        /// E-Line name
        eline_name: String,
        /// Endpoint within the E-Line (endpoint1 or endpoint2)
        endpoint: String,
    },

    /// Show one tap
    Get {
        /// E-Line name
        eline_name: String,
        /// Endpoint within the E-Line
        endpoint: String,
        /// Path name of the tap
        path_name: String,
    },

    /// Create or replace a tap
    Add {
        /// E-Line name
        eline_name: String,
        /// Endpoint within the E-Line
        endpoint: String,
        /// Path name of the tap
        path_name: String,
        /// Output port for the tap egress action
        output_port: String,
    },

    /// Delete one tap
    Delete {
        /// E-Line name
        eline_name: String,
        /// Endpoint within the E-Line
        endpoint: String,
        /// Path name of the tap
        path_name: String,
    },

    /// Delete every tap on an E-Line endpoint
    Purge {
        /// E-Line name
        eline_name: String,
        /// Endpoint within the E-Line
        endpoint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: TapCommand,
    }

    #[test]
    fn test_add_parsing() {
        let cli = TestCli::parse_from(["test", "add", "e1", "endpoint1", "tap1", "3"]);
        match cli.command {
            TapCommand::Add {
                eline_name,
                endpoint,
                path_name,
                output_port,
            } => {
                assert_eq!(eline_name, "e1");
                assert_eq!(endpoint, "endpoint1");
                assert_eq!(path_name, "tap1");
                assert_eq!(output_port, "3");
            }
            _ => panic!("Expected add"),
        }
    }

    #[test]
    fn test_purge_requires_scope() {
        assert!(TestCli::try_parse_from(["test", "purge", "e1"]).is_err());
    }
}
