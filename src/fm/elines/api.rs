//! E-Line API operations

use serde_json::{json, Value};

use crate::config::api;
use crate::error::Result;
use crate::fm::models::{required_name, FmResponse, ResourcePaths};
use crate::fm::FmClient;

fn elines_resource() -> ResourcePaths {
    ResourcePaths::new(api::ELINES, "eline")
}

impl FmClient {
    /// List all configured E-Lines
    pub async fn get_elines(&self, config: bool) -> FmResponse {
        self.list_resource(&elines_resource(), config).await
    }

    /// Get one E-Line by name
    pub async fn get_eline(&self, name: &str, config: bool) -> FmResponse {
        self.get_resource(&elines_resource(), name, config).await
    }

    /// Fetch statistics for one E-Line via the get-stats RPC
    pub async fn get_eline_stats(&self, name: &str) -> FmResponse {
        self.call_rpc(api::ELINE_STATS_RPC, json!({ "name": name }))
            .await
    }

    /// Create or replace an E-Line, then return the freshly-read entity
    pub async fn add_eline(&self, eline: &Value) -> Result<FmResponse> {
        let name = required_name(eline, "name", "eline")?;
        self.add_resource(&elines_resource(), &name, eline).await
    }

    /// Delete one E-Line; 404 means it was already absent
    pub async fn delete_eline(&self, name: &str) -> FmResponse {
        self.delete_resource(&elines_resource(), name).await
    }

    /// Delete every E-Line
    pub async fn delete_elines(&self) -> FmResponse {
        self.purge_resource(&elines_resource()).await
    }
}
