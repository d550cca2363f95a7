//! Configuration modules for the ContactHub server
//!
//! Each sub-module owns one configuration concern and knows how to load
//! itself from environment variables. `AppConfig::from_env` composes them
//! for the binary entry point.

pub mod auth;
pub mod database;
pub mod rate_limit;
pub mod server;

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server binding
    pub server: ServerConfig,

    /// Database connection settings
    pub database: DatabaseConfig,

    /// Authentication and token settings
    pub auth: AuthConfig,

    /// Rate limiting settings
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}
