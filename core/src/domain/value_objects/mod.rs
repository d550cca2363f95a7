//! Value objects carried between the boundary layer and the services.

pub mod contact_input;
pub mod contact_query;
pub mod user_input;

pub use contact_input::{ContactUpdate, NewContact};
pub use contact_query::ContactFilter;
pub use user_input::NewUser;
