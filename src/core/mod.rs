//! Core types for the middleware pipeline.
//!
//! - [`Request`] - HTTP request abstraction
//! - [`Response`] - HTTP response abstraction
//! - [`Context`] - Per-invocation context for middleware communication
//! - [`Error`] - Core error types
//!
//! # Example
//!
//! ```rust,ignore
//! use edge_index::core::{Context, Request};
//!
//! let req = Request::get("/blog?page=2")?;
//! let mut ctx = Context::local("req-1");
//! ctx.set("original_path", req.path().to_string());
//! ```

mod context;
mod error;
mod request;
mod response;

pub use context::Context;
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;
