//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the account core depends on:
//!
//! - **Database**: MySQL account repository using SQLx, with embedded migrations
//! - **Mail**: mail providers (console mock, HTTP API) and the adapter that
//!   turns core notifications into rendered mails
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `http-mail`: Enable the HTTP mail provider (default)

// Re-export core types for convenience
pub use accounts_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - mail providers and notification adapter
pub mod mail;

#[cfg(feature = "mysql")]
use accounts_shared::config::DatabaseConfig;

/// Connect to MySQL and apply pending migrations when configured
#[cfg(feature = "mysql")]
pub async fn initialize_database(
    config: &DatabaseConfig,
) -> Result<database::DatabasePool, InfrastructureError> {
    tracing::info!("Initializing database connection...");

    let pool = database::DatabasePool::new(config.clone()).await?;
    if config.run_migrations {
        pool.run_migrations().await?;
    }

    tracing::info!("Database initialized successfully");
    Ok(pool)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[cfg(feature = "mysql")]
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
