//! Tree-path command handlers

use crate::cli::{TreepathCommand, TreepathLeafCommand};
use crate::fm::FmClient;
use crate::output::{print_descriptor, print_json};

use super::models::{build_treepath, build_treepath_leaf};

/// Run one 'treepath' subcommand
pub async fn run_treepath_command(
    client: &FmClient,
    command: &TreepathCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        TreepathCommand::List => {
            let result = client.get_treepaths(true).await;
            match result.data {
                Some(treepaths) => print_json(&treepaths),
                None => println!("No Treepaths found"),
            }
        }
        TreepathCommand::Get { name } => {
            let result = client.get_treepath(name, true).await;
            match result.data {
                Some(treepath) if !treepath.is_null() => print_json(&treepath),
                _ => println!("Treepath {} not found", name),
            }
        }
        TreepathCommand::Add(args) => {
            let treepath = build_treepath(
                &args.name,
                &args.root_switch,
                &args.leaf_switch,
                &args.waypoints,
                args.provider,
            );
            let result = client.add_treepath(&treepath).await?;
            match result.data {
                Some(treepath) if !treepath.is_null() => print_json(&treepath),
                _ => println!("Treepath not added"),
            }
        }
        TreepathCommand::Delete { name } => {
            let result = client.delete_treepath(name).await;
            if result.is_status(200) {
                println!("Treepath {} removed", name);
            } else if result.is_status(404) {
                println!("Treepath {} does not exist", name);
            } else {
                print_descriptor(&result);
                println!("Cannot remove Treepath {}", name);
            }
        }
        TreepathCommand::Purge => {
            let result = client.delete_treepaths().await;
            if result.is_status(200) {
                println!("Treepaths removed");
            } else if result.is_status(404) {
                println!("No Treepaths to remove");
            } else {
                print_descriptor(&result);
                println!("Cannot remove Treepaths");
            }
        }
        TreepathCommand::Leaf { command } => run_leaf_command(client, command).await?,
    }
    Ok(())
}

async fn run_leaf_command(
    client: &FmClient,
    command: &TreepathLeafCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        TreepathLeafCommand::Get { name, node } => {
            let result = client.get_treepath_leaf(name, node, true).await;
            match result.data {
                Some(leaf) if !leaf.is_null() => print_json(&leaf),
                _ => println!("Leaf {} not found on Treepath {}", node, name),
            }
        }
        TreepathLeafCommand::Add {
            name,
            node,
            waypoints,
        } => {
            let leaf = build_treepath_leaf(node, waypoints);
            let result = client.add_treepath_leaf(name, node, &leaf).await?;
            match result.data {
                Some(leaf) if !leaf.is_null() => print_json(&leaf),
                _ => println!("Leaf not added"),
            }
        }
        TreepathLeafCommand::Delete { name, node } => {
            let result = client.delete_treepath_leaf(name, node).await;
            if result.is_status(200) {
                println!("Leaf {} removed from Treepath {}", node, name);
            } else if result.is_status(404) {
                println!("Leaf {} does not exist on Treepath {}", node, name);
            } else {
                print_descriptor(&result);
                println!("Cannot remove Leaf {} from Treepath {}", node, name);
            }
        }
    }
    Ok(())
}
