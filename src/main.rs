use clap::Parser;
use log::debug;

use lfmctl::cli::{Cli, Command};
use lfmctl::fm::{
    run_controller_command, run_eline_command, run_etree_command, run_ofnode_command,
    run_path_command, run_tap_command, run_treepath_command, ConnectionSettings, FmClient,
};
use lfmctl::topology::apply_topology;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let mut settings = ConnectionSettings::default();
    if let Some(topology) = &cli.topology {
        settings = apply_topology(topology, settings)?;
    }
    settings.verify = !cli.insecure;
    debug!(
        "controller target {}://{}:{}",
        settings.protocol, settings.ip, settings.port
    );

    let client = FmClient::new(settings)?;

    match &cli.command {
        Command::Path { command } => run_path_command(&client, command).await?,
        Command::Treepath { command } => run_treepath_command(&client, command).await?,
        Command::Eline { command } => run_eline_command(&client, command).await?,
        Command::Etree { command } => run_etree_command(&client, command).await?,
        Command::Tap { command } => run_tap_command(&client, command).await?,
        Command::Ofnode { command } => run_ofnode_command(&client, command).await?,
        Command::Controller { command } => run_controller_command(&client, command).await?,
    }

    Ok(())
}
