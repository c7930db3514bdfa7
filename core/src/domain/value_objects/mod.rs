//! Value objects representing immutable domain concepts.

pub mod account_query;
pub mod account_view;
pub mod notification;

pub use account_query::{AccountFilter, AccountSort, AccountSortField, AccountUpdate};
pub use account_view::AccountView;
pub use notification::{Notification, NotificationTemplate};
