//! Viewer-request event model and the edge handler entry point.
//!
//! The edge delivers one event per request:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "context": { "eventType": "viewer-request", "requestId": "..." },
//!   "viewer": { "ip": "198.51.100.11" },
//!   "request": { "method": "GET", "uri": "/blog", "querystring": {}, "headers": {}, "cookies": {} }
//! }
//! ```
//!
//! [`handler`] returns the `request` object with only `uri` rewritten. All
//! other request fields are carried as opaque JSON and written back as they
//! came in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Result;
use crate::rewrite::{normalize_uri, Rewrite};

/// Request object of a viewer-request event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Request path. A missing `uri` is read as the empty string.
    #[serde(default)]
    pub uri: String,

    /// Every other field (`method`, `querystring`, `headers`, `cookies`, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Request {
    /// Create a request with only a URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            fields: Map::new(),
        }
    }

    /// Add a passthrough field.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// HTTP method, if the event carries one.
    pub fn method(&self) -> Option<&str> {
        self.fields.get("method").and_then(Value::as_str)
    }

    /// Get a passthrough field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Viewer-request event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<Value>,

    pub request: Request,
}

impl Event {
    /// Wrap a bare request in an event.
    pub fn new(request: Request) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }

    /// Edge request id from `context.requestId`, if present.
    pub fn request_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.get("requestId"))
            .and_then(Value::as_str)
    }

    /// Parse an event from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Rewrite the request's `uri` to its default document.
pub fn normalize(mut request: Request) -> Request {
    let before_len = request.uri.len();
    let rule = normalize_uri(&mut request.uri);

    if rule.is_rewrite() {
        tracing::debug!(
            from = &request.uri[..before_len],
            to = %request.uri,
            rule = rule.as_str(),
            "uri rewritten"
        );
    } else {
        tracing::trace!(uri = %request.uri, "uri unchanged");
    }

    request
}

/// Edge entry point: take the event's request, normalize it, hand it back.
pub fn handler(event: Event) -> Request {
    if let Some(id) = event.request_id() {
        tracing::debug!(request_id = id, "handling viewer request");
    }
    normalize(event.request)
}

/// Parse an event, run [`handler`], and serialize the returned request.
pub fn handle_json(input: &str) -> Result<String> {
    let request = handler(Event::from_json(input)?);
    Ok(serde_json::to_string(&request)?)
}

/// Same as [`handle_json`] with pretty-printed output.
pub fn handle_json_pretty(input: &str) -> Result<String> {
    let request = handler(Event::from_json(input)?);
    Ok(serde_json::to_string_pretty(&request)?)
}

/// Rule that [`normalize`] would apply to this request.
pub fn classify(request: &Request) -> Rewrite {
    Rewrite::classify(&request.uri)
}
