//! Path command handlers

use crate::cli::PathCommand;
use crate::fm::FmClient;
use crate::output::{print_descriptor, print_json};

use super::models::build_path;

/// Run one 'path' subcommand
pub async fn run_path_command(
    client: &FmClient,
    command: &PathCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        PathCommand::List => {
            let result = client.get_paths(true).await;
            match result.data {
                Some(paths) => print_json(&paths),
                None => println!("No paths found"),
            }
        }
        PathCommand::Get { name } => {
            let result = client.get_path(name, true).await;
            match result.data {
                Some(path) if !path.is_null() => print_json(&path),
                _ => println!("Path {} not found", name),
            }
        }
        PathCommand::Add(args) => {
            let path = build_path(
                &args.name,
                &args.source_switch,
                &args.destination_switch,
                &args.waypoints,
                args.provider,
            );
            let result = client.add_path(&path).await?;
            match result.data {
                Some(path) if !path.is_null() => print_json(&path),
                _ => println!("Path not added"),
            }
        }
        PathCommand::Delete { name } => {
            let result = client.delete_path(name).await;
            if result.is_status(200) {
                println!("Path {} removed", name);
            } else if result.is_status(404) {
                println!("Path {} does not exist", name);
            } else {
                print_descriptor(&result);
                println!("Cannot remove Path {}", name);
            }
        }
        PathCommand::Purge => {
            let result = client.delete_paths().await;
            if result.is_status(200) {
                println!("Paths removed");
            } else if result.is_status(404) {
                println!("No Paths to remove");
            } else {
                print_descriptor(&result);
                println!("Cannot remove Paths");
            }
        }
    }
    Ok(())
}
