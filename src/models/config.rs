//! Application configuration structures.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::utils::url::parse_endpoint;

/// AWS services requests can be signed for.
pub const SIGNING_SERVICES: &[&str] = &["es", "aoss"];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Cluster connection settings
    #[serde(default)]
    pub transport: TransportConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Override connection settings from `OPENSEARCH_*` environment variables.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(endpoint) = var("OPENSEARCH_ENDPOINT") {
            self.transport.endpoint = endpoint;
        }
        if let Some(username) = var("OPENSEARCH_USERNAME") {
            self.transport.username = Some(username);
        }
        if let Some(password) = var("OPENSEARCH_PASSWORD") {
            self.transport.password = Some(password);
        }
        if let Some(service) = var("OPENSEARCH_AWS_SERVICE") {
            self.transport.aws_service = Some(service);
        }
        if let Some(region) = var("OPENSEARCH_AWS_REGION") {
            self.transport.aws_region = Some(region);
        }
        if let Some(timeout) = var("OPENSEARCH_TIMEOUT_SECS") {
            self.transport.timeout_secs = timeout.parse().map_err(|_| {
                AppError::config(format!("OPENSEARCH_TIMEOUT_SECS is not a number: {timeout}"))
            })?;
        }
        Ok(())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        parse_endpoint(&self.transport.endpoint)
            .map_err(|e| AppError::validation(format!("transport.endpoint: {e}")))?;
        if self.transport.user_agent.trim().is_empty() {
            return Err(AppError::validation("transport.user_agent is empty"));
        }
        if self.transport.timeout_secs == 0 {
            return Err(AppError::validation("transport.timeout_secs must be > 0"));
        }
        if self.transport.password.is_some() && self.transport.username.is_none() {
            return Err(AppError::validation(
                "transport.password is set without transport.username",
            ));
        }
        if let Some(service) = &self.transport.aws_service {
            if !SIGNING_SERVICES.contains(&service.as_str()) {
                return Err(AppError::validation(format!(
                    "transport.aws_service must be one of {SIGNING_SERVICES:?}, got `{service}`"
                )));
            }
            if self.transport.username.is_some() {
                return Err(AppError::validation(
                    "transport.username and transport.aws_service are mutually exclusive",
                ));
            }
        }
        Ok(())
    }
}

/// Cluster connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Base URL of the cluster, optionally with a path prefix
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Basic auth user
    #[serde(default)]
    pub username: Option<String>,

    /// Basic auth password
    #[serde(default)]
    pub password: Option<String>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// AWS service to sign requests for (`es` or `aoss`); unsigned when unset
    #[serde(default)]
    pub aws_service: Option<String>,

    /// AWS region for signing; read from the AWS environment when unset
    #[serde(default)]
    pub aws_region: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            username: None,
            password: None,
            headers: BTreeMap::new(),
            aws_service: None,
            aws_region: None,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "defaults::level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::level(),
        }
    }
}

mod defaults {
    pub fn endpoint() -> String {
        "http://localhost:9200".into()
    }
    pub fn user_agent() -> String {
        concat!("osdispatch/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.transport.endpoint, "http://localhost:9200");
        assert_eq!(config.transport.timeout_secs, 10);
        assert!(config.transport.user_agent.starts_with("osdispatch/"));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let config = Config::parse(
            r#"
            [transport]
            endpoint = "https://search.example.com"
            username = "admin"
            password = "secret"

            [transport.headers]
            x-tenant = "blue"
            "#,
        )
        .unwrap();

        assert_eq!(config.transport.endpoint, "https://search.example.com");
        assert_eq!(config.transport.timeout_secs, 10);
        assert_eq!(config.transport.username.as_deref(), Some("admin"));
        assert_eq!(
            config.transport.headers.get("x-tenant").map(String::as_str),
            Some("blue")
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[transport]\ntimeout_secs = 3\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.transport.timeout_secs, 3);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config.transport.endpoint, "http://localhost:9200");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.transport.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.transport.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.transport.password = Some("secret".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_vars_overrides() {
        let mut config = Config::default();
        config
            .apply_vars(|key| match key {
                "OPENSEARCH_ENDPOINT" => Some("https://search.example.com:443".to_string()),
                "OPENSEARCH_TIMEOUT_SECS" => Some("25".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.transport.endpoint, "https://search.example.com:443");
        assert_eq!(config.transport.timeout_secs, 25);
        assert!(config.transport.username.is_none());
    }

    #[test]
    fn test_signing_settings() {
        let mut config = Config::default();
        config
            .apply_vars(|key| match key {
                "OPENSEARCH_AWS_SERVICE" => Some("aoss".to_string()),
                "OPENSEARCH_AWS_REGION" => Some("eu-west-1".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.transport.aws_service.as_deref(), Some("aoss"));
        assert_eq!(config.transport.aws_region.as_deref(), Some("eu-west-1"));
        assert!(config.validate().is_ok());

        config.transport.username = Some("admin".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.transport.aws_service = Some("s3".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_vars_rejects_bad_timeout() {
        let mut config = Config::default();
        let result = config.apply_vars(|key| {
            (key == "OPENSEARCH_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
