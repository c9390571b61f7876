//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Resolve the bind address into a socket address
//! - Resolve the log format selector
//!
//! # Design Decisions
//! - Validation is a pure function: ServiceConfig → ValidatedConfig
//! - Any failure here is fatal at startup, never a runtime path

use std::net::SocketAddr;

use crate::config::schema::{LogFormat, ServiceConfig};
use crate::config::ConfigError;

/// Configuration after validation, with every value in its typed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub bind_address: SocketAddr,
    pub log_format: LogFormat,
}

/// Validate a raw configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<ValidatedConfig, ConfigError> {
    let log_format = config.observability.log_format.parse()?;
    let bind_address = config
        .listener
        .bind_address
        .parse()
        .map_err(|source| ConfigError::InvalidAddress {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    Ok(ValidatedConfig {
        bind_address,
        log_format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_address() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "localhost".into();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddress { .. }));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let mut config = ServiceConfig::default();
        config.observability.log_format = "xml".into();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::UnknownLogFormat(_))
        ));
    }
}
