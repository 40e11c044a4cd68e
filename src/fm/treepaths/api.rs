//! Tree-path API operations, including the leaf sub-resource

use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::fm::models::{required_name, FmResponse, ResourcePaths};
use crate::fm::FmClient;

fn treepaths_resource() -> ResourcePaths {
    ResourcePaths::new(api::TREEPATHS, "treepath")
}

/// Leaves nest under their parent tree path
fn leaves_resource(treepath: &str) -> ResourcePaths {
    ResourcePaths::new(
        format!(
            "{}/treepath/{}/leaves",
            api::TREEPATHS,
            urlencoding::encode(treepath)
        ),
        "leaf",
    )
}

impl FmClient {
    /// List all configured tree paths
    pub async fn get_treepaths(&self, config: bool) -> FmResponse {
        self.list_resource(&treepaths_resource(), config).await
    }

    /// Get one tree path by name
    pub async fn get_treepath(&self, name: &str, config: bool) -> FmResponse {
        self.get_resource(&treepaths_resource(), name, config).await
    }

    /// Create or replace a tree path, then return the freshly-read entity
    pub async fn add_treepath(&self, treepath: &Value) -> Result<FmResponse> {
        let name = required_name(treepath, "name", "treepath")?;
        self.add_resource(&treepaths_resource(), &name, treepath)
            .await
    }

    /// Delete one tree path; 404 means it was already absent
    pub async fn delete_treepath(&self, name: &str) -> FmResponse {
        self.delete_resource(&treepaths_resource(), name).await
    }

    /// Delete every tree path
    pub async fn delete_treepaths(&self) -> FmResponse {
        self.purge_resource(&treepaths_resource()).await
    }

    /// Get one leaf of a tree path
    pub async fn get_treepath_leaf(&self, name: &str, node: &str, config: bool) -> FmResponse {
        self.get_resource(&leaves_resource(name), node, config)
            .await
    }

    /// Create or replace a leaf on an existing tree path
    pub async fn add_treepath_leaf(
        &self,
        name: &str,
        node: &str,
        leaf: &Value,
    ) -> Result<FmResponse> {
        self.add_resource(&leaves_resource(name), node, leaf).await
    }

    /// Delete one leaf of a tree path
    pub async fn delete_treepath_leaf(&self, name: &str, node: &str) -> FmResponse {
        self.delete_resource(&leaves_resource(name), node).await
    }
}
