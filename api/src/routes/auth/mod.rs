//! Authentication route handlers
//!
//! This module contains the account lifecycle endpoints:
//! - Registration
//! - Activation and resending the activation code
//! - Password reset request and completion

pub mod activate;
pub mod password;
pub mod register;

pub use activate::{activate, resend_activation};
pub use password::{forgot_password, reset_password};
pub use register::register;
