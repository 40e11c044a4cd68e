//! Controller command definitions

use clap::Subcommand;

/// Verbs for the 'controller' group
#[derive(Subcommand, Debug)]
pub enum ControllerCommand {
    /// Show the controller system status
    Status,
}
