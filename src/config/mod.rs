//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file, then CLI overrides)
//!     → validation.rs (typed address and log format)
//!     → ValidatedConfig (immutable, consumed once at startup)
//! ```
//!
//! # Design Decisions
//! - Only the bind address and log format are configurable
//! - All fields have defaults to allow an empty or missing file
//! - Every error is fatal before the listener is bound

pub mod loader;
pub mod schema;
pub mod validation;

use std::net::AddrParseError;
use std::path::PathBuf;

pub use loader::{load_config, Overrides};
pub use schema::{ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig};
pub use validation::ValidatedConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid bind address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },
    #[error("Unknown log format '{0}'")]
    UnknownLogFormat(String),
}
