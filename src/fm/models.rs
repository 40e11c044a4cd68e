//! Shared result descriptor and entity-kind metadata

use serde::Serialize;
use serde_json::Value;

use crate::error::{FmError, Result};
use crate::fm::controller::RawResponse;

/// Extract the string field an entity is keyed by, or fail validation
pub(crate) fn required_name(entity: &Value, key: &str, kind: &str) -> Result<String> {
    entity
        .get(key)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            FmError::Validation(format!("{} is missing required property '{}'", kind, key))
        })
}

/// Normalized result of one client operation
///
/// `status_code` is `None` only when no response was obtained at all
/// (connection failure). `content` preserves the raw body whenever a
/// response arrived. `data` is populated only on the operation's success
/// status; for singleton gets an empty envelope list decodes to an explicit
/// `Value::Null`, which is distinct from "not decoded".
#[derive(Debug, Clone, Default, Serialize)]
pub struct FmResponse {
    pub status_code: Option<u16>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl FmResponse {
    /// The distinguished "no response" transport-failure outcome
    pub fn no_response() -> Self {
        Self::default()
    }

    /// Whether any HTTP response was obtained
    pub fn has_response(&self) -> bool {
        self.status_code.is_some()
    }

    /// Whether the response carries the given status code
    pub fn is_status(&self, code: u16) -> bool {
        self.status_code == Some(code)
    }

    /// Wrap a raw reply without decoding anything
    pub(crate) fn from_raw(raw: Option<RawResponse>) -> Self {
        match raw {
            Some(r) => Self {
                status_code: Some(r.status),
                content: r.body,
                data: None,
            },
            None => Self::no_response(),
        }
    }

    /// Decode the entire body as the collection envelope on 200
    pub(crate) fn from_collection(raw: Option<RawResponse>) -> Self {
        let mut resp = Self::from_raw(raw);
        if resp.is_status(200) {
            resp.data = parse_body(&resp.content);
        }
        resp
    }

    /// Decode `body[key][0]` on 200; an empty list becomes explicit null
    pub(crate) fn from_singleton(raw: Option<RawResponse>, key: &str) -> Self {
        let mut resp = Self::from_raw(raw);
        if resp.is_status(200) {
            resp.data = parse_body(&resp.content).map(|body| match body.get(key) {
                Some(Value::Array(items)) if !items.is_empty() => items[0].clone(),
                _ => Value::Null,
            });
        }
        resp
    }

    /// Decode `body[key]` on 200 as-is; absent key becomes explicit null
    pub(crate) fn from_keyed(raw: Option<RawResponse>, key: &str) -> Self {
        let mut resp = Self::from_raw(raw);
        if resp.is_status(200) {
            resp.data =
                parse_body(&resp.content).map(|body| body.get(key).cloned().unwrap_or(Value::Null));
        }
        resp
    }
}

/// Parse a body, leaving `data` unset when the payload is not JSON
fn parse_body(content: &str) -> Option<Value> {
    match serde_json::from_str(content) {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("response body is not valid JSON: {}", e);
            None
        }
    }
}

/// Metadata describing one entity kind's RESTCONF layout
///
/// Parameterizes the generic CRUD helpers in `FmClient`: one table entry per
/// kind instead of thirty near-identical request functions. Nested kinds
/// (taps, leaves) bake their parent segments into `collection`.
#[derive(Debug, Clone)]
pub(crate) struct ResourcePaths {
    /// Collection path relative to the datastore root
    pub collection: String,
    /// Literal segment between the collection and an item name
    pub item_segment: &'static str,
    /// Key wrapping an entity in PUT payloads
    pub payload_key: &'static str,
    /// Key the wire format wraps returned items under
    pub envelope_key: &'static str,
}

impl ResourcePaths {
    pub fn new(collection: impl Into<String>, item_segment: &'static str) -> Self {
        Self {
            collection: collection.into(),
            item_segment,
            payload_key: item_segment,
            envelope_key: item_segment,
        }
    }

    /// Taps decode under a namespaced key while PUTs use the bare one
    pub fn with_envelope_key(mut self, key: &'static str) -> Self {
        self.envelope_key = key;
        self
    }

    /// Item path for a named entity, with the name percent-encoded
    pub fn item(&self, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.collection,
            self.item_segment,
            urlencoding::encode(name)
        )
    }
}
