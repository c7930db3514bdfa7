//! Common utility functions

pub mod validation;

pub use validation::{mask_email, normalize_email, validators};
