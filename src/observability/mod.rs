//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and listeners produce:
//!     → logging.rs (structured log events, per-request spans via TraceLayer)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → Console (stdout)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```

pub mod logging;
pub mod metrics;
