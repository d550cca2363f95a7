//! # ContactHub API
//!
//! HTTP boundary of the ContactHub backend: DTOs, middleware, route
//! handlers, and the application factory. All business logic lives in
//! `ch_core`; this crate binds it to actix-web and maps domain errors to
//! HTTP statuses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
