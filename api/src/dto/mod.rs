//! Data transfer objects of the HTTP API

pub mod auth;
pub mod user;

pub use auth::*;
pub use user::*;
