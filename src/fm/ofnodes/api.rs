//! OpenFlow inventory queries
//!
//! All inventory reads target the operational datastore; there is nothing
//! to configure here.

use serde_json::json;

use crate::config::api;
use crate::fm::models::{FmResponse, ResourcePaths};
use crate::fm::FmClient;

fn nodes_resource() -> ResourcePaths {
    ResourcePaths::new(api::INVENTORY, "node")
}

fn connectors_resource(node: &str) -> ResourcePaths {
    ResourcePaths::new(
        format!("{}/node/{}", api::INVENTORY, urlencoding::encode(node)),
        "node-connector",
    )
}

impl FmClient {
    /// List all OpenFlow nodes known to the controller
    ///
    /// On 200 the node list is unwrapped from the inventory envelope and
    /// defaults to an empty list when the inventory carries no nodes.
    pub async fn get_ofnodes(&self) -> FmResponse {
        let url = format!(
            "{}/{}",
            self.controller().operational_url(),
            api::INVENTORY
        );
        let mut resp = FmResponse::from_keyed(self.controller().http_get(&url).await, "nodes");
        if let Some(nodes) = resp.data.take() {
            resp.data = Some(nodes.get("node").cloned().unwrap_or_else(|| json!([])));
        }
        resp
    }

    /// Get one OpenFlow node by id
    pub async fn get_ofnode(&self, node: &str) -> FmResponse {
        self.get_resource(&nodes_resource(), node, false).await
    }

    /// Get one node connector by id
    pub async fn get_ofnode_connector(&self, node: &str, connector: &str) -> FmResponse {
        self.get_resource(&connectors_resource(node), connector, false)
            .await
    }

    /// Get the traffic statistics of one node connector
    pub async fn get_ofnode_connector_stats(&self, node: &str, connector: &str) -> FmResponse {
        let url = format!(
            "{}/{}/flow-capable-node-connector-statistics",
            self.controller().operational_url(),
            connectors_resource(node).item(connector)
        );
        FmResponse::from_keyed(self.controller().http_get(&url).await, api::CONNECTOR_STATS)
    }
}
