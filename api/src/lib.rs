//! HTTP API for the account backend
//!
//! Library exports for the server binary and the route tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{configure_routes, create_app};
pub use routes::AppState;
