//! Business services containing domain logic and use cases.

pub mod auth;
pub mod contact;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{hash_password, verify_password, AuthService};
pub use contact::{birthday_window, ContactService, BIRTHDAY_WINDOW_DAYS};
pub use token::TokenService;
pub use user::{AvatarError, AvatarProvider, NoopAvatarProvider, UserService};
