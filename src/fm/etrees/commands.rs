//! E-Tree command handlers

use crate::cli::{EtreeCommand, EtreeLeafCommand};
use crate::fm::FmClient;
use crate::output::{print_descriptor, print_json};

use super::models::{build_etree, build_etree_leaf};

/// Run one 'etree' subcommand
pub async fn run_etree_command(
    client: &FmClient,
    command: &EtreeCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        EtreeCommand::List => {
            let result = client.get_etrees(true).await;
            match result.data {
                Some(etrees) => print_json(&etrees),
                None => println!("No E-Trees found"),
            }
        }
        EtreeCommand::Get { name } => {
            let result = client.get_etree(name, true).await;
            match result.data {
                Some(etree) if !etree.is_null() => print_json(&etree),
                _ => println!("E-Tree {} not found", name),
            }
        }
        EtreeCommand::Stats { name } => {
            let result = client.get_etree_stats(name).await;
            match result.data {
                Some(stats) => print_json(&stats),
                None => println!("No E-Tree stats found for {}", name),
            }
        }
        EtreeCommand::Add(args) => {
            let etree = build_etree(args);
            let result = client.add_etree(&etree).await?;
            match result.data {
                Some(etree) if !etree.is_null() => print_json(&etree),
                _ => println!("E-Tree not added"),
            }
        }
        EtreeCommand::Delete { name } => {
            let result = client.delete_etree(name).await;
            if result.is_status(200) {
                println!("E-Tree {} removed", name);
            } else if result.is_status(404) {
                println!("E-Tree {} does not exist", name);
            } else {
                print_descriptor(&result);
                println!("Cannot remove E-Tree {}", name);
            }
        }
        EtreeCommand::Purge => {
            let result = client.delete_etrees().await;
            if result.is_status(200) {
                println!("All E-Trees removed");
            } else if result.is_status(404) {
                println!("No E-Trees to remove");
            } else {
                print_descriptor(&result);
                println!("Cannot remove E-Trees");
            }
        }
        EtreeCommand::Leaf { command } => run_leaf_command(client, command).await?,
    }
    Ok(())
}

async fn run_leaf_command(
    client: &FmClient,
    command: &EtreeLeafCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        EtreeLeafCommand::Get { name, node } => {
            let result = client.get_etree_leaf(name, node, true).await;
            match result.data {
                Some(leaf) if !leaf.is_null() => print_json(&leaf),
                _ => println!("Leaf {} not found on E-Tree {}", node, name),
            }
        }
        EtreeLeafCommand::Add {
            name,
            node,
            switch_port,
            segmentation_id,
        } => {
            let leaf = build_etree_leaf(node, switch_port, *segmentation_id);
            let result = client.add_etree_leaf(name, &leaf).await?;
            match result.data {
                Some(leaf) if !leaf.is_null() => print_json(&leaf),
                _ => println!("Leaf not added"),
            }
        }
        EtreeLeafCommand::Delete { name, node } => {
            let result = client.delete_etree_leaf(name, node).await;
            if result.is_status(200) {
                println!("Leaf {} removed from E-Tree {}", node, name);
            } else if result.is_status(404) {
                println!("Leaf {} does not exist on E-Tree {}", node, name);
            } else {
                print_descriptor(&result);
                println!("Cannot remove Leaf {} from E-Tree {}", node, name);
            }
        }
    }
    Ok(())
}
