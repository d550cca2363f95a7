//! HTTP middleware: bearer authentication, rate limiting, CORS.

pub mod auth;
pub mod cors;
pub mod rate_limit;

pub use auth::{CurrentUser, IdentityResolver, RequireAuth};
pub use rate_limit::RateLimiter;
