use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use accounts_api::{create_app, telemetry, AppState};
use accounts_core::repositories::{AccountRepository, InMemoryAccountRepository};
use accounts_core::services::{AccountService, AccountServiceConfig, BcryptPasswordHasher};
use accounts_infra::database::MySqlAccountRepository;
use accounts_infra::mail::{create_mail_service_for, MailNotificationSender};
use accounts_shared::config::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific file first, then the plain .env
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting accounts API server");

    let mail = create_mail_service_for(&config.mail, config.environment)
        .context("Failed to initialize mail service")?;
    let notifier = Arc::new(MailNotificationSender::from_config(mail, &config.mail));
    let hasher = Arc::new(BcryptPasswordHasher::new());
    let service_config = AccountServiceConfig::from_app_config(&config);

    // Without DATABASE_URL a development server keeps accounts in memory
    if config.environment.is_development() && std::env::var("DATABASE_URL").is_err() {
        tracing::warn!("DATABASE_URL not set, using the in-memory account store");
        let repository = Arc::new(InMemoryAccountRepository::new());
        let service = AccountService::new(repository, notifier, hasher, service_config);
        return serve(&config, service).await;
    }

    let pool = accounts_infra::initialize_database(&config.database)
        .await
        .context("Failed to initialize database")?;
    let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let service = AccountService::new(repository, notifier, hasher, service_config);

    let result = serve(&config, service).await;
    pool.close().await;
    result
}

async fn serve<R>(
    config: &AppConfig,
    service: AccountService<R, MailNotificationSender, BcryptPasswordHasher>,
) -> anyhow::Result<()>
where
    R: AccountRepository + 'static,
{
    let state = web::Data::new(AppState::new(service));
    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let bind_address = config.server.bind_address();

    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, max_payload_size))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}
