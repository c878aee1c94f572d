// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps Platform API key
    pub google_maps_api_key: String,

    /// Nearby-search radius per grid point, in meters
    pub search_radius_m: u32,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| String::new()),

            search_radius_m: env::var("SEARCH_RADIUS_M")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .unwrap_or(500),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.google_maps_api_key.is_empty() {
            log::warn!("GOOGLE_MAPS_API_KEY not configured - searches will fail upstream");
        }

        if self.search_radius_m == 0 {
            return Err("SEARCH_RADIUS_M must be greater than zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_radius() {
        let config = Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "test".to_string(),
            log_level: "info".to_string(),
            google_maps_api_key: "key".to_string(),
            search_radius_m: 0,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "test".to_string(),
            log_level: "info".to_string(),
            google_maps_api_key: String::new(),
            search_radius_m: 500,
        };

        // Missing API key only warns
        assert!(config.validate().is_ok());
    }
}
