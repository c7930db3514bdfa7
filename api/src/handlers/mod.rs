//! Shared request handling helpers

pub mod error;

pub use error::{
    domain_error_response, extract_language, localized_error, validation_error_response,
    validation_message_response,
};
