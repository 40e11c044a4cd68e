//! E-Tree API operations, including the leaf sub-resource

use serde_json::{json, Value};

use crate::config::api;
use crate::error::{FmError, Result};
use crate::fm::models::{required_name, FmResponse, ResourcePaths};
use crate::fm::FmClient;

fn etrees_resource() -> ResourcePaths {
    ResourcePaths::new(api::ETREES, "etree")
}

fn leaves_resource(etree: &str) -> ResourcePaths {
    ResourcePaths::new(
        format!(
            "{}/etree/{}/leaves",
            api::ETREES,
            urlencoding::encode(etree)
        ),
        "leaf",
    )
}

impl FmClient {
    /// List all configured E-Trees
    pub async fn get_etrees(&self, config: bool) -> FmResponse {
        self.list_resource(&etrees_resource(), config).await
    }

    /// Get one E-Tree by name
    pub async fn get_etree(&self, name: &str, config: bool) -> FmResponse {
        self.get_resource(&etrees_resource(), name, config).await
    }

    /// Fetch statistics for one E-Tree via the get-stats RPC
    pub async fn get_etree_stats(&self, name: &str) -> FmResponse {
        self.call_rpc(api::ETREE_STATS_RPC, json!({ "name": name }))
            .await
    }

    /// Create or replace an E-Tree, then return the freshly-read entity
    pub async fn add_etree(&self, etree: &Value) -> Result<FmResponse> {
        let name = required_name(etree, "name", "etree")?;
        self.add_resource(&etrees_resource(), &name, etree).await
    }

    /// Delete one E-Tree; 404 means it was already absent
    pub async fn delete_etree(&self, name: &str) -> FmResponse {
        self.delete_resource(&etrees_resource(), name).await
    }

    /// Delete every E-Tree
    pub async fn delete_etrees(&self) -> FmResponse {
        self.purge_resource(&etrees_resource()).await
    }

    /// Get one leaf of an E-Tree
    pub async fn get_etree_leaf(&self, name: &str, node: &str, config: bool) -> FmResponse {
        self.get_resource(&leaves_resource(name), node, config)
            .await
    }

    /// Create or replace a leaf on an existing E-Tree
    ///
    /// The leaf is keyed by its own `node` field.
    pub async fn add_etree_leaf(&self, name: &str, leaf: &Value) -> Result<FmResponse> {
        if name.is_empty() {
            return Err(FmError::Validation(
                "didn't get etree-name property".to_string(),
            ));
        }
        let node = required_name(leaf, "node", "leaf")?;
        self.add_resource(&leaves_resource(name), &node, leaf).await
    }

    /// Delete one leaf of an E-Tree
    pub async fn delete_etree_leaf(&self, name: &str, node: &str) -> FmResponse {
        self.delete_resource(&leaves_resource(name), node).await
    }
}
