//! Middleware pipeline for request/response processing.
//!
//! This is how the rewrite plugs into an HTTP stack instead of an edge event.
//! Middleware can:
//! - Inspect and modify incoming requests
//! - Short-circuit the pipeline and return early responses
//! - Modify outgoing responses
//!
//! # Example
//!
//! ```rust,ignore
//! use edge_index::core::{Context, Request, Response};
//! use edge_index::middleware::{IndexRewriteMiddleware, MiddlewareChain};
//!
//! let chain = MiddlewareChain::new().add(IndexRewriteMiddleware::new());
//!
//! let mut ctx = Context::local("req-1");
//! let res = chain.process(Request::get("/blog")?, &mut ctx, |req, _ctx| {
//!     Response::ok(req.path().to_string()) // "/blog/index.html"
//! });
//! ```

mod chain;
mod index_rewrite;

pub use chain::MiddlewareChain;
pub use index_rewrite::{IndexRewriteMiddleware, ORIGINAL_PATH_KEY};

use crate::core::{Context, Request, Response};

/// Result of middleware request processing.
#[derive(Debug)]
pub enum MiddlewareResult {
    /// Continue to the next middleware with the (possibly modified) request.
    Next(Request),
    /// Stop the middleware chain and return this response immediately.
    Stop(Response),
}

impl MiddlewareResult {
    /// Check if this result continues the chain.
    pub fn is_next(&self) -> bool {
        matches!(self, MiddlewareResult::Next(_))
    }

    /// Check if this result stops the chain.
    pub fn is_stop(&self) -> bool {
        matches!(self, MiddlewareResult::Stop(_))
    }

    /// Unwrap the request if this is a Next result.
    pub fn into_request(self) -> Option<Request> {
        match self {
            MiddlewareResult::Next(req) => Some(req),
            MiddlewareResult::Stop(_) => None,
        }
    }

    /// Unwrap the response if this is a Stop result.
    pub fn into_response(self) -> Option<Response> {
        match self {
            MiddlewareResult::Next(_) => None,
            MiddlewareResult::Stop(res) => Some(res),
        }
    }
}

/// Trait for implementing middleware.
///
/// The pipeline executes `on_request` in priority order and `on_response`
/// in reverse order.
///
/// ```text
/// Request → MW1.on_request → MW2.on_request → Handler
///                                                ↓
/// Response ← MW1.on_response ← MW2.on_response ←─┘
/// ```
pub trait Middleware: Send + Sync {
    /// Unique name for this middleware (used for logging/debugging).
    fn name(&self) -> &'static str;

    /// Priority for ordering in the chain.
    /// Lower values execute first for requests, last for responses.
    ///
    /// Suggested priority ranges:
    /// - -100..0: Security, logging
    /// - 0..50: Request modification (URI rewrites)
    /// - 50..100: Response modification
    fn priority(&self) -> i32 {
        0
    }

    /// Process an incoming request.
    ///
    /// Return `MiddlewareResult::Next(req)` to continue the chain,
    /// or `MiddlewareResult::Stop(res)` to short-circuit with a response.
    fn on_request(&self, req: Request, _ctx: &mut Context) -> MiddlewareResult {
        MiddlewareResult::Next(req)
    }

    /// Process an outgoing response.
    fn on_response(&self, res: Response, _ctx: &Context) -> Response {
        res
    }
}
