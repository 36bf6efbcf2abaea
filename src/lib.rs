//! edge_index - default-document rewriting for CDN edge requests.
//!
//! Directory-style and extensionless request paths are rewritten so they
//! resolve to an `index.html` object at the origin:
//!
//! - `/blog/` → `/blog/index.html`
//! - `/blog` → `/blog/index.html`
//! - `/styles/main.css` → unchanged
//!
//! The rule lives in [`rewrite`]. It is exposed two ways:
//!
//! - [`event::handler`] for edge viewer-request events (JSON in, request out)
//! - [`middleware::IndexRewriteMiddleware`] for an `http`-based middleware chain
//!
//! # Example
//!
//! ```rust
//! use edge_index::event::{handler, Event, Request};
//!
//! let request = handler(Event::new(Request::new("/blog")));
//! assert_eq!(request.uri, "/blog/index.html");
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars), empty when built outside a checkout
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0" or "0.1.0 (abc12345)"
pub const VERSION: &str = env!("FULL_VERSION");

pub mod config;
pub mod core;
pub mod event;
pub mod logging;
pub mod middleware;
pub mod rewrite;

pub use config::Config;
pub use event::{handler, Event, Request};
pub use rewrite::{normalize_uri, Rewrite, DEFAULT_DOCUMENT};
