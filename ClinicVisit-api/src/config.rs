use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

/// Errors raised while reading the server configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got '{0}'")]
    InvalidHost(String),

    #[error("CORS_ALLOW_ORIGIN is not a valid header value: '{0}'")]
    InvalidCorsOrigin(String),
}

/// Server configuration, read from the environment
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,

    /// Deployment name reported by the health endpoint
    pub environment: String,

    /// Single allowed CORS origin; any origin when unset
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            environment: "development".to_string(),
            cors_allow_origin: None,
        }
    }
}

impl ApiConfig {
    /// Read `HOST`, `PORT`, `APP_ENV` and `CORS_ALLOW_ORIGIN` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(host) = get("HOST") {
            config.host = host.parse().map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        }

        if let Some(port) = get("PORT") {
            config.port = match port.parse::<u16>() {
                Ok(value) if value > 0 => value,
                _ => return Err(ConfigError::InvalidPort(port)),
            };
        }

        if let Some(environment) = get("APP_ENV") {
            config.environment = environment;
        }

        if let Some(origin) = get("CORS_ALLOW_ORIGIN") {
            if origin != "*" {
                let value = HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))?;
                config.cors_allow_origin = Some(value);
            }
        }

        Ok(config)
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.environment, "development");
        assert!(config.cors_allow_origin.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("APP_ENV", "production"),
            ("CORS_ALLOW_ORIGIN", "https://clinic.example.org"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.environment, "production");
        assert_eq!(
            config.cors_allow_origin,
            Some(HeaderValue::from_static("https://clinic.example.org"))
        );
    }

    #[test]
    fn test_wildcard_origin_means_any() {
        let config = config_from(&[("CORS_ALLOW_ORIGIN", "*")]).unwrap();
        assert!(config.cors_allow_origin.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort("http".to_string())
        );
        assert_eq!(
            config_from(&[("PORT", "0")]).unwrap_err(),
            ConfigError::InvalidPort("0".to_string())
        );
        assert_eq!(
            config_from(&[("HOST", "localhost")]).unwrap_err(),
            ConfigError::InvalidHost("localhost".to_string())
        );
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = config_from(&[("PORT", "  "), ("APP_ENV", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
    }
}
