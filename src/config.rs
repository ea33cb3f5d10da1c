//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Database connection string
    pub database_url: String,
    /// Secret used to sign and verify auth tokens
    pub jwt_secret: String,
    /// TTL in milliseconds applied to cached product responses
    pub cache_ttl_ms: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Upload endpoint of the external media host
    pub media_upload_url: String,
    /// Upload preset passed along with every media upload
    pub media_upload_preset: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `DATABASE_URL` - Database connection string (default: `sqlite::memory:`)
    /// - `JWT_SECRET_KEY` - Token signing secret (default: dev-only value)
    /// - `CACHE_TTL_MS` - Cached response TTL in milliseconds (default: 60000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    /// - `MEDIA_UPLOAD_URL` - Media host upload endpoint
    /// - `MEDIA_UPLOAD_PRESET` - Media host upload preset (default: ml_default)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string()),
            jwt_secret: env::var("JWT_SECRET_KEY")
                .unwrap_or_else(|_| "insecure-dev-secret".to_string()),
            cache_ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            media_upload_url: env::var("MEDIA_UPLOAD_URL").unwrap_or_else(|_| {
                "https://api.cloudinary.com/v1_1/demo/image/upload".to_string()
            }),
            media_upload_preset: env::var("MEDIA_UPLOAD_PRESET")
                .unwrap_or_else(|_| "ml_default".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "insecure-dev-secret".to_string(),
            cache_ttl_ms: 60_000,
            cleanup_interval: 30,
            media_upload_url: "https://api.cloudinary.com/v1_1/demo/image/upload".to_string(),
            media_upload_preset: "ml_default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.cache_ttl_ms, 60_000);
        assert_eq!(config.cleanup_interval, 30);
        assert_eq!(config.media_upload_preset, "ml_default");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.cache_ttl_ms, 60_000);
        assert_eq!(config.cleanup_interval, 30);
    }
}
