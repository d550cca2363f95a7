//! Domain entities representing core business objects.

pub mod contact;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use contact::Contact;
pub use token::{Claims, TokenPair, TokenScope, TOKEN_TYPE_BEARER};
pub use user::User;
