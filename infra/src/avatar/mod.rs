//! External avatar providers.

mod gravatar;

pub use gravatar::GravatarProvider;
