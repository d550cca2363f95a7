//! Account management: signup and lookups.

mod avatar;
mod service;

pub use avatar::{AvatarError, AvatarProvider, NoopAvatarProvider};
pub use service::UserService;
