//! Mock HTTP/HTTPS responder for end-to-end proxy tests.
//!
//! Serves a fixed set of canned endpoints (delays, header echo, status
//! injection, large payloads, POST echo) on an HTTP and an HTTPS listener,
//! with permissive CORS headers on every response.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ResponderConfig;
pub use http::MockServer;
pub use lifecycle::Shutdown;
