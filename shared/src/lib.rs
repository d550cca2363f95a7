//! Shared utilities and common types for the ContactHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Pagination types for list endpoints

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, JwtConfig, RateLimitConfig, ServerConfig};
pub use types::PageQuery;
