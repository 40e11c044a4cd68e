//! Tap command handlers

use crate::cli::TapCommand;
use crate::fm::FmClient;
use crate::output::{print_descriptor, print_json};

use super::models::build_tap;

/// Run one 'tap' subcommand
pub async fn run_tap_command(
    client: &FmClient,
    command: &TapCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        TapCommand::List {
            eline_name,
            endpoint,
        } => {
            let result = client.get_taps(eline_name, endpoint, true).await;
            match result.data {
                Some(taps) => print_json(&taps),
                None => println!("no taps found"),
            }
        }
        TapCommand::Get {
            eline_name,
            endpoint,
            path_name,
        } => {
            let result = client.get_tap(eline_name, endpoint, path_name, true).await;
            match result.data {
                Some(tap) if !tap.is_null() => print_json(&tap),
                _ => println!(
                    "Tap {} not found for {} on {}",
                    path_name, eline_name, endpoint
                ),
            }
        }
        TapCommand::Add {
            eline_name,
            endpoint,
            path_name,
            output_port,
        } => {
            let tap = build_tap(path_name, output_port);
            let result = client.add_tap(eline_name, endpoint, &tap).await?;
            match result.data {
                Some(tap) if !tap.is_null() => print_json(&tap),
                _ => println!("Tap not added: {}", result.content),
            }
        }
        TapCommand::Delete {
            eline_name,
            endpoint,
            path_name,
        } => {
            let result = client.delete_tap(eline_name, endpoint, path_name).await;
            if result.is_status(200) {
                println!(
                    "Tap {} removed for {} on {}",
                    path_name, eline_name, endpoint
                );
            } else if result.is_status(404) {
                println!(
                    "Tap {} does not exist for {} on {}",
                    path_name, eline_name, endpoint
                );
            } else {
                print_descriptor(&result);
                println!(
                    "Cannot remove Tap {} for {} on {}",
                    path_name, eline_name, endpoint
                );
            }
        }
        TapCommand::Purge {
            eline_name,
            endpoint,
        } => {
            let result = client.delete_taps(eline_name, endpoint).await;
            if result.is_status(200) {
                println!("All Taps removed for {} on {}", eline_name, endpoint);
            } else if result.is_status(404) {
                println!("No Taps to remove for {} on {}", eline_name, endpoint);
            } else {
                print_descriptor(&result);
                println!("Cannot remove Taps for {} on {}", eline_name, endpoint);
            }
        }
    }
    Ok(())
}
