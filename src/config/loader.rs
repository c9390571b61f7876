//! Configuration loading from disk and command-line overrides.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidatedConfig};
use crate::config::ConfigError;

/// Values given on the command line. `None` keeps the file or default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub log_format: Option<String>,
}

/// Parse configuration from a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration: defaults, then the optional file,
/// then command-line overrides. The result is validated.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<ValidatedConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(addr) = overrides.bind_address {
        config.listener.bind_address = addr;
    }
    if let Some(format) = overrides.log_format {
        config.observability.log_format = format;
    }

    validate_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("transform-service-{}-{}.toml", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_without_file() {
        let config = load_config(None, Overrides::default()).unwrap();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:1423");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_win_over_file() {
        let path = write_temp(
            "overrides",
            "[listener]\nbind_address = \"127.0.0.1:9000\"\n[observability]\nlog_format = \"text\"\n",
        );
        let config = load_config(
            Some(&path),
            Overrides {
                bind_address: None,
                log_format: Some("json".into()),
            },
        )
        .unwrap();
        assert_eq!(config.bind_address.port(), 9000);
        assert_eq!(config.log_format, LogFormat::Json);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/transform.toml")), Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = write_temp("malformed", "[listener\nbind_address = 3");
        let err = load_config(Some(&path), Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let _ = fs::remove_file(path);
    }
}
