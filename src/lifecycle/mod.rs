//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Metrics → HTTP listener → TLS context → HTTPS listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Exit (no drain)
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{launch, Running, StartupError};
