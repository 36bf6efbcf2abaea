//! Default-document rewrite as middleware.
//!
//! Applies the same rule as the edge handler to the path of an HTTP request.
//! The query string is kept verbatim: `/blog?page=2` becomes
//! `/blog/index.html?page=2`.

use http::uri::{PathAndQuery, Uri};

use crate::core::{Context, Error, Request, Result};
use crate::rewrite::{normalize_uri, Rewrite};

use super::{Middleware, MiddlewareResult};

/// Context key holding the path as it was before a rewrite.
pub const ORIGINAL_PATH_KEY: &str = "original_path";

/// Rewrites directory-style and extensionless paths to `index.html`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexRewriteMiddleware;

impl IndexRewriteMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// Rebuild `uri` with a new path, keeping scheme, authority and query.
fn with_path(uri: &Uri, path: &str) -> Result<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>()?);

    Uri::from_parts(parts).map_err(|e| Error::Custom(format!("invalid uri parts: {}", e)))
}

impl Middleware for IndexRewriteMiddleware {
    fn name(&self) -> &'static str {
        "index_rewrite"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn on_request(&self, mut req: Request, ctx: &mut Context) -> MiddlewareResult {
        let mut path = req.path().to_string();
        let rule = normalize_uri(&mut path);

        if rule == Rewrite::Unchanged {
            return MiddlewareResult::Next(req);
        }

        match with_path(req.uri(), &path) {
            Ok(uri) => {
                tracing::debug!(
                    request_id = %ctx.request_id,
                    from = req.path(),
                    to = %path,
                    rule = rule.as_str(),
                    "uri rewritten"
                );
                ctx.set(ORIGINAL_PATH_KEY, req.path().to_string());
                req.set_uri(uri);
            }
            Err(e) => {
                tracing::warn!(
                    request_id = %ctx.request_id,
                    uri = %req.uri(),
                    error = %e,
                    "failed to rebuild uri, passing request through"
                );
            }
        }

        MiddlewareResult::Next(req)
    }
}
