//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → tls.rs (build rustls context from PEM files, before binding)
//!     → listener.rs (bind TCP sockets)
//!     → Hand off to HTTP layer (plain or TLS serve loop)
//! ```
//!
//! # Design Decisions
//! - A TLS failure disables only the HTTPS listener
//! - Every accepted connection runs on its own task

pub mod listener;
pub mod tls;
