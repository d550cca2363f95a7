//! JWT token minting and validation.

mod service;

pub use service::TokenService;
