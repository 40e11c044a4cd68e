//! Tap API operations

use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::fm::models::{required_name, FmResponse, ResourcePaths};
use crate::fm::FmClient;

/// Taps PUT under a bare "tap" key but decode under the namespaced one
fn taps_resource(eline: &str, endpoint: &str) -> ResourcePaths {
    ResourcePaths::new(
        format!(
            "{}/eline/{}/{}/taps",
            api::ELINES,
            urlencoding::encode(eline),
            urlencoding::encode(endpoint)
        ),
        "tap",
    )
    .with_envelope_key(api::TAP_ENVELOPE)
}

impl FmClient {
    /// List the taps on one E-Line endpoint
    pub async fn get_taps(&self, eline: &str, endpoint: &str, config: bool) -> FmResponse {
        self.list_resource(&taps_resource(eline, endpoint), config)
            .await
    }

    /// Get one tap by its path name
    pub async fn get_tap(
        &self,
        eline: &str,
        endpoint: &str,
        path_name: &str,
        config: bool,
    ) -> FmResponse {
        self.get_resource(&taps_resource(eline, endpoint), path_name, config)
            .await
    }

    /// Create or replace a tap, then return the freshly-read entity
    ///
    /// The tap is keyed by its own `path-name` field.
    pub async fn add_tap(&self, eline: &str, endpoint: &str, tap: &Value) -> Result<FmResponse> {
        let path_name = required_name(tap, "path-name", "tap")?;
        self.add_resource(&taps_resource(eline, endpoint), &path_name, tap)
            .await
    }

    /// Delete one tap; 404 means it was already absent
    pub async fn delete_tap(&self, eline: &str, endpoint: &str, path_name: &str) -> FmResponse {
        self.delete_resource(&taps_resource(eline, endpoint), path_name)
            .await
    }

    /// Delete every tap on one E-Line endpoint
    pub async fn delete_taps(&self, eline: &str, endpoint: &str) -> FmResponse {
        self.purge_resource(&taps_resource(eline, endpoint)).await
    }
}
