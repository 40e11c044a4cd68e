//! Controller command handlers

use crate::cli::ControllerCommand;
use crate::fm::FmClient;
use crate::output::print_json;

/// Run one 'controller' subcommand
pub async fn run_controller_command(
    client: &FmClient,
    command: &ControllerCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ControllerCommand::Status => {
            let result = client.get_controller_status().await;
            match result.data {
                Some(status) => print_json(&status),
                None => println!("No system status found"),
            }
        }
    }
    Ok(())
}
