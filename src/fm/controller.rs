//! Controller connection: settings, URL building, HTTP transport

use log::{debug, warn};
use reqwest::{Client, Method};
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{FmError, Result};

/// Connection settings for one controller target
///
/// Loaded once at startup (defaults, then an optional topology descriptor)
/// and immutable afterwards. Held by the `Controller` instance rather than
/// process-wide, so one process can talk to several controllers.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub protocol: String,
    pub ip: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub timeout_secs: u64,
    pub verify: bool,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            protocol: defaults::PROTOCOL.to_string(),
            ip: defaults::IP.to_string(),
            port: defaults::PORT,
            user: defaults::USER.to_string(),
            password: defaults::PASSWORD.to_string(),
            timeout_secs: defaults::TIMEOUT_SECS,
            verify: true,
        }
    }
}

impl ConnectionSettings {
    /// Check that every property a request needs is present
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("ip", &self.ip),
            ("user", &self.user),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                return Err(FmError::Config(format!("can't find property {}", name)));
            }
        }
        if self.port == 0 {
            return Err(FmError::Config("can't find property port".to_string()));
        }
        Ok(())
    }
}

/// A raw HTTP reply: status code plus unparsed body
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Represents the remote controller device
///
/// Owns the connection settings and the HTTP client, and is the only place
/// RESTCONF URLs are composed.
pub struct Controller {
    settings: ConnectionSettings,
    http: Client,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl Controller {
    /// Build a controller handle, validating the settings first
    pub fn new(settings: ConnectionSettings) -> Result<Self> {
        settings.validate()?;

        let http = Client::builder()
            .danger_accept_invalid_certs(!settings.verify)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| FmError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            settings,
            http,
            base_url_override: None,
        })
    }

    /// Create a controller with a custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub(crate) fn with_base_url(settings: ConnectionSettings, base_url: String) -> Result<Self> {
        let mut ctrl = Self::new(settings)?;
        ctrl.base_url_override = Some(base_url);
        Ok(ctrl)
    }

    /// The configured settings
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// `{protocol}://{ip}:{port}/restconf`
    pub fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "{}://{}:{}{}",
            self.settings.protocol, self.settings.ip, self.settings.port, api::BASE_PATH
        )
    }

    /// URL for the config datastore
    pub fn config_url(&self) -> String {
        self.base_url() + "/config"
    }

    /// URL for the operational datastore
    pub fn operational_url(&self) -> String {
        self.base_url() + "/operational"
    }

    /// URL for RPC invocations
    pub fn operations_url(&self) -> String {
        self.base_url() + "/operations"
    }

    /// Select config vs operational datastore
    pub fn resource_url(&self, config: bool) -> String {
        if config {
            self.config_url()
        } else {
            self.operational_url()
        }
    }

    /// Perform one HTTP request: a single attempt, no retries.
    ///
    /// A connection-level failure (DNS, refused, timeout) is logged and
    /// reported as `None` so callers can short-circuit on "no response"
    /// rather than unwinding through every layer.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Option<RawResponse> {
        debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method, url)
            .basic_auth(&self.settings.user, Some(&self.settings.password))
            .header("content-type", "application/json")
            .header("accept", "application/json");

        if let Some(body) = body {
            req = req.body(body);
        }

        match req.send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                match resp.text().await {
                    Ok(body) => Some(RawResponse { status, body }),
                    Err(e) => {
                        warn!("failed to read response body from {}: {}", url, e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("request to {} failed: {}", url, e);
                None
            }
        }
    }

    pub(crate) async fn http_get(&self, url: &str) -> Option<RawResponse> {
        self.request(Method::GET, url, None).await
    }

    pub(crate) async fn http_put(&self, url: &str, body: String) -> Option<RawResponse> {
        self.request(Method::PUT, url, Some(body)).await
    }

    pub(crate) async fn http_post(&self, url: &str, body: String) -> Option<RawResponse> {
        self.request(Method::POST, url, Some(body)).await
    }

    pub(crate) async fn http_delete(&self, url: &str) -> Option<RawResponse> {
        self.request(Method::DELETE, url, None).await
    }
}
