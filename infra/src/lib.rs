//! # ContactHub Infrastructure
//!
//! Concrete implementations of the core repository interfaces backed by
//! PostgreSQL, plus clients for external services (Gravatar).

pub mod avatar;
pub mod database;

pub use avatar::GravatarProvider;
pub use database::postgres::{PgContactRepository, PgUserRepository};
pub use database::{create_pool, PgHealthProbe};
