//! Imagestore configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `IMAGESTORE_HOST` - Bind address (default: 127.0.0.1)
//! - `IMAGESTORE_PORT` - Listen port (default: 5001)
//! - `IMAGESTORE_UPLOAD_DIR` - Flat storage directory (default: uploads)
//! - `IMAGESTORE_BASE_URL` - Public URL prefix used in listings
//!   (default: `http://localhost:<port>`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Imagestore application configuration.
#[derive(Debug, Clone)]
pub struct ImagestoreConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Flat directory all uploads land in
    pub upload_dir: PathBuf,
    /// Public URL prefix used when building file URLs in responses
    pub base_url: String,
}

impl ImagestoreConfig {
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

        let host = get_env_or_default("IMAGESTORE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("IMAGESTORE_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("IMAGESTORE_PORT", "5001")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("IMAGESTORE_PORT".to_string(), e.to_string())
            })?;
        let upload_dir = PathBuf::from(get_env_or_default("IMAGESTORE_UPLOAD_DIR", "uploads"));
        let base_url = std::env::var("IMAGESTORE_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));

        Ok(Self {
            host,
            port,
            upload_dir,
            base_url,
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
        let config = ImagestoreConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 5001,
            upload_dir: PathBuf::from("uploads"),
            base_url: "http://localhost:5001".to_string(),
        };

        assert_eq!(config.socket_addr().port(), 5001);
    }
}
