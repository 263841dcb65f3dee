//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, body limit, trace, CORS layers)
//!     → endpoint.rs (classify method + path)
//!     → query.rs (parse query string)
//!     → handlers.rs (canned response for the endpoint)
//!     → response.rs (pretty JSON or plain text, exact Content-Length)
//!     → Send to client
//! ```

pub mod endpoint;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod server;

pub use endpoint::Endpoint;
pub use error::ResponderError;
pub use query::QueryParams;
pub use server::MockServer;
