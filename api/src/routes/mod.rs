//! Route handlers
//!
//! Handlers are thin: validate the DTO, call the service, convert the
//! result. Everything generic over the repository/provider types flows
//! through `AppState`.

pub mod auth;
pub mod contacts;
pub mod health;
pub mod users;
