//! Contact management: CRUD, search and the upcoming-birthday query.

mod service;

pub use service::{birthday_window, ContactService, BIRTHDAY_WINDOW_DAYS};
