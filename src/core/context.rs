//! Per-invocation context for the middleware pipeline.

use std::any::Any;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

/// Request-scoped data shared across middleware.
///
/// Carries client information and a typed key/value store so one
/// middleware can leave notes for the ones after it (e.g. the path before a
/// rewrite).
pub struct Context {
    /// Client IP address.
    pub client_ip: IpAddr,

    /// Request ID for log correlation.
    pub request_id: String,

    values: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Context {
    /// Create a new context.
    #[inline]
    pub fn new(client_ip: IpAddr, request_id: impl Into<String>) -> Self {
        Self {
            client_ip,
            request_id: request_id.into(),
            values: HashMap::new(),
        }
    }

    /// Context for invocations with no real client (tests, CLI).
    pub fn local(request_id: impl Into<String>) -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::LOCALHOST), request_id)
    }

    /// Set a custom value.
    #[inline]
    pub fn set<T: Send + Sync + 'static>(&mut self, key: &str, value: T) {
        self.values.insert(key.to_string(), Box::new(value));
    }

    /// Get a custom value.
    #[inline]
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|v| v.downcast_ref())
    }

    /// Check whether a key is set, regardless of type.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("client_ip", &self.client_ip)
            .field("request_id", &self.request_id)
            .field("values", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}
