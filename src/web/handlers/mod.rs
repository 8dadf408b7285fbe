//! HTML handlers for the user directory.

mod home;
mod users;

pub use home::home_handler;
pub use users::{USERS_PATH, UsersTemplate, users_handler};
