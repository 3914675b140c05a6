//! # Clause-Chain Telemetry
//!
//! Structured logging for clause subsystems, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clause_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::for_subsystem("03", "cross-chain-message");
//! init_logging(&config)?;
//!
//! clause_telemetry::log_instance_event!(info, "cl-03", "Message sent", instance);
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CL_SERVICE_NAME` | `clause-chain` | Service name |
//! | `CL_SUBSYSTEM_ID` | `00` | Subsystem id |
//! | `CL_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `CL_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `CL_LOG_TARGET` | `true` | Include module target |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

/// Telemetry errors.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Invalid configuration value
    #[error("Invalid telemetry configuration: {0}")]
    Config(String),

    /// Global subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
