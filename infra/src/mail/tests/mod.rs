//! Unit tests for the mail module

mod create_service_tests;
mod mock_mail_tests;

#[cfg(feature = "http-mail")]
mod http_mail_tests;
