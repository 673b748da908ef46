//! Configuration management for the server.

use std::env;
use std::path::PathBuf;

/// Endpoint the dashboard fetches its remote users from.
pub const DEFAULT_USERS_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Remote users endpoint
    pub users_api_url: String,
    /// Seed file to use instead of the bundled one
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            users_api_url: DEFAULT_USERS_API_URL.to_string(),
            seed_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = match env::var("PORT") {
            Ok(port) => port.parse().map_err(|_| ConfigError::InvalidPort)?,
            Err(_) => defaults.port,
        };

        let users_api_url = env::var("USERS_API_URL").unwrap_or(defaults.users_api_url);

        let seed_path = env::var_os("SEED_PATH").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            users_api_url,
            seed_path,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,
}
