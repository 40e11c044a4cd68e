//! Path API operations

use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::fm::models::{required_name, FmResponse, ResourcePaths};
use crate::fm::FmClient;

fn paths_resource() -> ResourcePaths {
    ResourcePaths::new(api::PATHS, "path")
}

impl FmClient {
    /// List all configured paths
    pub async fn get_paths(&self, config: bool) -> FmResponse {
        self.list_resource(&paths_resource(), config).await
    }

    /// Get one path by name
    pub async fn get_path(&self, name: &str, config: bool) -> FmResponse {
        self.get_resource(&paths_resource(), name, config).await
    }

    /// Create or replace a path, then return the freshly-read entity
    pub async fn add_path(&self, path: &Value) -> Result<FmResponse> {
        let name = required_name(path, "name", "path")?;
        self.add_resource(&paths_resource(), &name, path).await
    }

    /// Delete one path; 404 means it was already absent
    pub async fn delete_path(&self, name: &str) -> FmResponse {
        self.delete_resource(&paths_resource(), name).await
    }

    /// Delete every path
    pub async fn delete_paths(&self) -> FmResponse {
        self.purge_resource(&paths_resource()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FmError;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_paths_success() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        let body = json!({"paths": {"path": [{"name": "p1"}, {"name": "p2"}]}});
        Mock::given(method("GET"))
            .and(path("/config/lumina-flowmanager-path:paths"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let resp = client.get_paths(true).await;
        assert!(resp.is_status(200));
        assert_eq!(resp.data, Some(body));
    }

    #[tokio::test]
    async fn test_get_paths_empty_collection_still_decodes() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/config/lumina-flowmanager-path:paths"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paths": {}})))
            .mount(&mock_server)
            .await;

        let resp = client.get_paths(true).await;
        // Empty but decoded, which is distinct from a transport failure
        assert_eq!(resp.data, Some(json!({"paths": {}})));
    }

    #[tokio::test]
    async fn test_get_paths_operational_datastore() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/operational/lumina-flowmanager-path:paths"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paths": {}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.get_paths(false).await;
        assert!(resp.is_status(200));
    }

    #[tokio::test]
    async fn test_get_path_singleton_envelope() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/config/lumina-flowmanager-path:paths/path/p1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"path": [{"name": "p1", "provider": "sr"}]})),
            )
            .mount(&mock_server)
            .await;

        let resp = client.get_path("p1", true).await;
        assert_eq!(resp.data, Some(json!({"name": "p1", "provider": "sr"})));
    }

    #[tokio::test]
    async fn test_get_path_not_found_keeps_raw_descriptor() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("data-missing"))
            .mount(&mock_server)
            .await;

        let resp = client.get_path("ghost", true).await;
        assert!(resp.is_status(404));
        assert!(resp.data.is_none());
        assert_eq!(resp.content, "data-missing");
    }

    #[tokio::test]
    async fn test_add_path_round_trip() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        let submitted = json!({
            "name": "p1",
            "endpoint1": {"node": "s1"},
            "endpoint2": {"node": "s2"},
            "provider": "sr"
        });

        Mock::given(method("PUT"))
            .and(path("/config/lumina-flowmanager-path:paths/path/p1"))
            .and(body_json(json!({"path": [submitted.clone()]})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/config/lumina-flowmanager-path:paths/path/p1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"path": [submitted.clone()]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.add_path(&submitted).await.unwrap();
        assert!(resp.is_status(200));
        assert_eq!(resp.data, Some(submitted));
    }

    #[tokio::test]
    async fn test_add_path_without_name_is_local_error() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = client.add_path(&json!({"endpoint1": {"node": "s1"}})).await;
        assert!(matches!(result, Err(FmError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_path_absent_is_success() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/config/lumina-flowmanager-path:paths/path/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let resp = client.delete_path("ghost").await;
        assert!(resp.is_status(404));
    }

    #[tokio::test]
    async fn test_delete_paths_collection_url() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/config/lumina-flowmanager-path:paths"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.delete_paths().await;
        assert!(resp.is_status(200));
    }
}
