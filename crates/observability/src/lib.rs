//! casetrace observability — console tracing setup for the casetrace crates.
//!
//! # Quick start
//!
//! ```no_run
//! use casetrace_observability::ObservabilityConfig;
//!
//! let config = ObservabilityConfig::new("casetrace-cli").with_log_level("debug");
//! casetrace_observability::init(config).expect("tracing init");
//!
//! tracing::info!("client started");
//! ```
//!
//! # Environment variables
//!
//! - `CASETRACE_LOG` or `RUST_LOG` — log level filter (e.g. `info`,
//!   `casetrace_client=debug`)
//! - `CASETRACE_SERVICE_NAME` — service name recorded at startup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
