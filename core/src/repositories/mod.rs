//! Repository interfaces abstracting the relational store.

pub mod contact;
pub mod health;
pub mod user;

pub use contact::{ContactRepository, MockContactRepository};
pub use health::{HealthProbe, NoopHealthProbe};
pub use user::{MockUserRepository, UserRepository};
