//! E-Line command handlers

use crate::cli::ElineCommand;
use crate::fm::FmClient;
use crate::output::{print_descriptor, print_json};

use super::models::build_eline;

/// Run one 'eline' subcommand
pub async fn run_eline_command(
    client: &FmClient,
    command: &ElineCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ElineCommand::List => {
            let result = client.get_elines(true).await;
            match result.data {
                Some(elines) => print_json(&elines),
                None => println!("No E-Lines found"),
            }
        }
        ElineCommand::Get { name } => {
            let result = client.get_eline(name, true).await;
            match result.data {
                Some(eline) if !eline.is_null() => print_json(&eline),
                _ => println!("E-Line {} not found", name),
            }
        }
        ElineCommand::Stats { name } => {
            let result = client.get_eline_stats(name).await;
            match result.data {
                Some(stats) => print_json(&stats),
                None => println!("No E-Line stats found for {}", name),
            }
        }
        ElineCommand::Add(args) => {
            let eline = build_eline(args);
            let result = client.add_eline(&eline).await?;
            match result.data {
                Some(eline) if !eline.is_null() => print_json(&eline),
                _ => println!("E-Line not added"),
            }
        }
        ElineCommand::Delete { name } => {
            let result = client.delete_eline(name).await;
            if result.is_status(200) {
                println!("E-Line {} removed", name);
            } else if result.is_status(404) {
                println!("E-Line {} does not exist", name);
            } else {
                print_descriptor(&result);
                println!("Cannot remove E-Line {}", name);
            }
        }
        ElineCommand::Purge => {
            let result = client.delete_elines().await;
            if result.is_status(200) {
                println!("All E-Lines removed");
            } else if result.is_status(404) {
                println!("No E-Lines to remove");
            } else {
                print_descriptor(&result);
                println!("Cannot remove E-Lines");
            }
        }
    }
    Ok(())
}
