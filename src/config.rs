//! Configuration System
//!
//! Loads the frontend configuration from environment variables. Both
//! variables are required; the process exits at startup if either is
//! missing. The values are provided by the Kubernetes deployment manifest
//! (`k8s/guestbook-frontend.deployment.yaml`).

use thiserror::Error;

/// Frontend configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host:port of the backend message API (`GUESTBOOK_API_ADDR`)
    pub backend_addr: String,
    /// Port the frontend listens on (`PORT`)
    pub port: u16,
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not specified")]
    MissingEnv(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("GUESTBOOK_API_ADDR").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Build a config from raw values. Split out from [`Config::from_env`]
    /// so validation can be tested without touching process globals.
    fn from_values(
        backend_addr: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let backend_addr = backend_addr
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEnv("GUESTBOOK_API_ADDR"))?;

        let port = port
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEnv("PORT"))?;

        let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
            name: "PORT",
            value: port.clone(),
        })?;

        Ok(Self { backend_addr, port })
    }

    /// Get the socket address string to bind the listener to
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config =
            Config::from_values(Some("backend:8080".to_string()), Some("8081".to_string()))
                .unwrap();
        assert_eq!(config.backend_addr, "backend:8080");
        assert_eq!(config.port, 8081);
        assert_eq!(config.addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_missing_backend_addr() {
        let err = Config::from_values(None, Some("8081".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("GUESTBOOK_API_ADDR")));
    }

    #[test]
    fn test_missing_port() {
        let err = Config::from_values(Some("backend:8080".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("PORT")));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let err =
            Config::from_values(Some(String::new()), Some("8081".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("GUESTBOOK_API_ADDR")));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_values(
            Some("backend:8080".to_string()),
            Some("not-a-port".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
