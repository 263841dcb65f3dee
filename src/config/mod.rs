//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line flags
//!     → cli.rs (clap parse)
//!     → schema.rs (ResponderConfig::from_cli)
//!     → validation.rs (semantic checks)
//!     → ResponderConfig (validated, immutable)
//!     → handed to startup, limits cloned into handler state
//! ```
//!
//! # Design Decisions
//! - No config file and no environment variables; flags only
//! - All fields have defaults matching the fixed fixture ports
//! - Validation separates syntactic (clap) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::{
    LimitsConfig, ListenerConfig, ObservabilityConfig, ResponderConfig, ServeMode, TlsConfig,
};
pub use validation::{validate_config, ValidationError};
