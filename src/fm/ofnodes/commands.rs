//! OpenFlow node command handlers

use crate::cli::OfnodeCommand;
use crate::fm::FmClient;
use crate::output::print_json;

/// Run one 'ofnode' subcommand
pub async fn run_ofnode_command(
    client: &FmClient,
    command: &OfnodeCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        OfnodeCommand::List => {
            let result = client.get_ofnodes().await;
            match result.data {
                Some(nodes) if nodes.as_array().is_some_and(|n| !n.is_empty()) => {
                    print_json(&nodes)
                }
                _ => println!("No OF Nodes Found"),
            }
        }
        OfnodeCommand::Get { node } => {
            let result = client.get_ofnode(node).await;
            match result.data {
                Some(found) if !found.is_null() => print_json(&found),
                _ => println!("OF node {} not found", node),
            }
        }
        OfnodeCommand::Connector { node, connector } => {
            let result = client.get_ofnode_connector(node, connector).await;
            match result.data {
                Some(found) if !found.is_null() => print_json(&found),
                _ => println!("Connector {} not found on OF node {}", connector, node),
            }
        }
        OfnodeCommand::ConnectorStats { node, connector } => {
            let result = client.get_ofnode_connector_stats(node, connector).await;
            match result.data {
                Some(stats) if !stats.is_null() => print_json(&stats),
                _ => println!("No stats found for connector {} on {}", connector, node),
            }
        }
    }
    Ok(())
}
