//! System status endpoint

use crate::config::api;
use crate::fm::models::FmResponse;
use crate::fm::FmClient;

impl FmClient {
    /// Fetch the controller's system status from the operational datastore
    pub async fn get_controller_status(&self) -> FmResponse {
        let url = format!(
            "{}/{}",
            self.controller().operational_url(),
            api::SYSTEM_STATUS
        );
        FmResponse::from_collection(self.controller().http_get(&url).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_status_decoded_whole() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        let body = json!({
            "system-status": {"status": "UP", "nodes": [{"id": "node1", "status": "UP"}]}
        });

        Mock::given(method("GET"))
            .and(path("/operational/lumina-controller-status:system-status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&mock_server)
            .await;

        let resp = client.get_controller_status().await;
        assert_eq!(resp.data, Some(body));
    }

    #[tokio::test]
    async fn test_status_error_not_decoded() {
        let mock_server = MockServer::start().await;
        let client = FmClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/operational/lumina-controller-status:system-status"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let resp = client.get_controller_status().await;
        assert!(resp.is_status(503));
        assert!(resp.data.is_none());
        assert_eq!(resp.content, "unavailable");
    }
}
