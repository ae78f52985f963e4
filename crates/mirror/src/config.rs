//! Mirror configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MIRROR_MONGODB_URI` - MongoDB connection string
//!   (default: `mongodb://localhost:27017`)
//! - `MIRROR_DATABASE` - Database name (default: shoplab)
//! - `MIRROR_SOURCE_URL` - External JSON endpoint to mirror
//!   (default: `https://jsonplaceholder.typicode.com/users`)
//! - `MIRROR_HOST` - Bind address (default: 127.0.0.1)
//! - `MIRROR_PORT` - Listen port (default: 5002)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Connection string used when no environment variable is set.
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// The read-only feed the mirror follows by default.
const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Mirror application configuration.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// MongoDB connection URI (may contain credentials)
    pub mongodb_uri: SecretString,
    /// Database holding the mirrored collection
    pub database: String,
    /// External JSON endpoint to fetch from
    pub source_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl MirrorConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port variables fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mongodb_uri = SecretString::from(get_env_or_default(
            "MIRROR_MONGODB_URI",
            DEFAULT_MONGODB_URI,
        ));
        let database = get_env_or_default("MIRROR_DATABASE", "shoplab");
        let source_url = get_env_or_default("MIRROR_SOURCE_URL", DEFAULT_SOURCE_URL);
        let host = get_env_or_default("MIRROR_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MIRROR_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MIRROR_PORT", "5002")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MIRROR_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            mongodb_uri,
            database,
            source_url,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = MirrorConfig {
            mongodb_uri: SecretString::from(DEFAULT_MONGODB_URI),
            database: "shoplab".to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 5002,
        };

        assert_eq!(config.socket_addr().port(), 5002);
    }
}
