//! Flow Manager HTTP client with generic CRUD helpers

use serde_json::{Map, Value};

use crate::error::{FmError, Result};
use crate::fm::controller::{ConnectionSettings, Controller};
use crate::fm::models::{FmResponse, ResourcePaths};

/// Client for one Flow Manager service
///
/// Every entity kind delegates to the generic helpers here; the per-entity
/// modules only supply `ResourcePaths` metadata and payload shaping. One
/// request is in flight at a time; create issues a follow-up read and the
/// delete fallbacks issue a follow-up lookup, so a command performs at most
/// two round trips.
pub struct FmClient {
    ctrl: Controller,
}

impl FmClient {
    /// Create a client, validating the connection settings
    pub fn new(settings: ConnectionSettings) -> Result<Self> {
        Ok(Self {
            ctrl: Controller::new(settings)?,
        })
    }

    /// Create a client with a custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub(crate) fn with_base_url(settings: ConnectionSettings, base_url: String) -> Result<Self> {
        Ok(Self {
            ctrl: Controller::with_base_url(settings, base_url)?,
        })
    }

    /// The underlying controller handle
    pub fn controller(&self) -> &Controller {
        &self.ctrl
    }

    /// GET the whole collection; 200 decodes the body as the envelope
    pub(crate) async fn list_resource(&self, res: &ResourcePaths, config: bool) -> FmResponse {
        let url = format!("{}/{}", self.ctrl.resource_url(config), res.collection);
        FmResponse::from_collection(self.ctrl.http_get(&url).await)
    }

    /// GET one named item; 200 unwraps the one-element envelope list
    pub(crate) async fn get_resource(
        &self,
        res: &ResourcePaths,
        name: &str,
        config: bool,
    ) -> FmResponse {
        let url = format!("{}/{}", self.ctrl.resource_url(config), res.item(name));
        FmResponse::from_singleton(self.ctrl.http_get(&url).await, res.envelope_key)
    }

    /// PUT one item at its name, then re-read it on success
    ///
    /// The observable result of a create is always the freshly-fetched
    /// entity, never the echo of the PUT. An absent or empty entity is a
    /// local validation error and performs zero HTTP calls.
    pub(crate) async fn add_resource(
        &self,
        res: &ResourcePaths,
        name: &str,
        entity: &Value,
    ) -> Result<FmResponse> {
        match entity.as_object() {
            Some(obj) if !obj.is_empty() => {}
            _ => {
                return Err(FmError::Validation(format!(
                    "didn't get any {} properties",
                    res.item_segment
                )))
            }
        }

        let mut envelope = Map::new();
        envelope.insert(res.payload_key.to_string(), Value::Array(vec![entity.clone()]));
        let body = Value::Object(envelope).to_string();

        let url = format!("{}/{}", self.ctrl.config_url(), res.item(name));
        let put = FmResponse::from_raw(self.ctrl.http_put(&url, body).await);

        if put.is_status(200) || put.is_status(201) {
            Ok(self.get_resource(res, name, true).await)
        } else {
            Ok(put)
        }
    }

    /// DELETE one named item; 404 is success-as-absence
    ///
    /// Any other status falls back to a Get so the caller can see the
    /// state that prevented deletion. A transport failure short-circuits
    /// with the no-response descriptor.
    pub(crate) async fn delete_resource(&self, res: &ResourcePaths, name: &str) -> FmResponse {
        let url = format!("{}/{}", self.ctrl.config_url(), res.item(name));
        let del = FmResponse::from_raw(self.ctrl.http_delete(&url).await);

        match del.status_code {
            Some(200) | Some(404) | None => del,
            Some(_) => self.get_resource(res, name, true).await,
        }
    }

    /// DELETE the entire collection; fallback is a List rather than a Get
    pub(crate) async fn purge_resource(&self, res: &ResourcePaths) -> FmResponse {
        let url = format!("{}/{}", self.ctrl.config_url(), res.collection);
        let del = FmResponse::from_raw(self.ctrl.http_delete(&url).await);

        match del.status_code {
            Some(200) | Some(404) | None => del,
            Some(_) => self.list_resource(res, true).await,
        }
    }

    /// POST an RPC-style call to the operations URL
    ///
    /// The body is `{"input": {...}}`; on 200 the meaningful payload lives
    /// under `output`, defaulted to an empty mapping when absent.
    pub(crate) async fn call_rpc(&self, rpc: &str, input: Value) -> FmResponse {
        let url = format!("{}/{}", self.ctrl.operations_url(), rpc);
        let body = serde_json::json!({ "input": input }).to_string();

        let mut resp = FmResponse::from_keyed(self.ctrl.http_post(&url, body).await, "output");
        if resp.is_status(200) && resp.data == Some(Value::Null) {
            resp.data = Some(Value::Object(Map::new()));
        }
        resp
    }
}

#[cfg(test)]
impl FmClient {
    /// Create a test client pointed at a wiremock server
    pub(crate) fn test_client(base_url: &str) -> Self {
        Self::with_base_url(ConnectionSettings::default(), base_url.to_string())
            .expect("default settings are valid")
    }
}
