//! Topology descriptor loading
//!
//! A topology file is a YAML document with a `controllers` list. The first
//! entry supplies the connection settings; a `vip` address takes precedence
//! over the per-node `ip`.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::fm::ConnectionSettings;

/// The subset of a topology document this tool reads
#[derive(Debug, Deserialize)]
struct Topology {
    #[serde(default)]
    controllers: Vec<ControllerEntry>,
}

/// One controller entry in the topology file
#[derive(Debug, Deserialize)]
struct ControllerEntry {
    ip: String,
    vip: Option<String>,
    port: u16,
    user: String,
    password: String,
    protocol: String,
    timeout: Option<u64>,
}

/// Overlay settings with the first controller from a topology file
///
/// An empty `controllers` list leaves the settings untouched. IO and YAML
/// failures surface as topology errors.
pub fn apply_topology(path: &Path, mut settings: ConnectionSettings) -> Result<ConnectionSettings> {
    let raw = std::fs::read_to_string(path)?;
    let topology: Topology = serde_yml::from_str(&raw)?;

    if let Some(controller) = topology.controllers.into_iter().next() {
        debug!("using controller {} from {}", controller.ip, path.display());
        settings.ip = controller.vip.unwrap_or(controller.ip);
        settings.port = controller.port;
        settings.user = controller.user;
        settings.password = controller.password;
        settings.protocol = controller.protocol;
        if let Some(timeout) = controller.timeout {
            settings.timeout_secs = timeout;
        }
    }

    Ok(settings)
}
