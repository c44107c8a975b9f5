//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 5000;

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        Self {
            host: host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: port
                .and_then(|p| p.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(None, None);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = AppConfig::from_vars(Some("0.0.0.0".into()), Some("http".into()));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, AppConfig::DEFAULT_PORT);

        assert_eq!(AppConfig::from_vars(None, Some("8080".into())).port, 8080);
    }
}
