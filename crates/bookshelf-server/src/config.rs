//! Server configuration from environment variables.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 8888)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("not a valid port number: {}", s),
            })?,
            Err(_) => 8888,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { port, log_level })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Defaults and the invalid-port case share one test so no parallel
    // test observes a half-mutated environment.
    #[test]
    fn test_from_env() {
        // SAFETY: This test is not run in parallel with other tests that read PORT.
        unsafe {
            env::remove_var("PORT");
            env::remove_var("LOG_LEVEL");
        }

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 8888);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.socket_addr().port(), 8888);

        // SAFETY: as above.
        unsafe { env::set_var("PORT", "not-a-port") };

        let err = ServerConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        // SAFETY: as above.
        unsafe { env::remove_var("PORT") };
    }
}
