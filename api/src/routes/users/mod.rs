//! User management route handlers

pub mod detail;
pub mod list;

pub use detail::{delete_user, get_user, update_user};
pub use list::list_users;
