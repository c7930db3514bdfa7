//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`].

use actix_web::{error::InternalError, web, App, HttpRequest, HttpResponse};
use std::collections::HashMap;
use tracing_actix_web::TracingLogger;

use accounts_core::repositories::AccountRepository;
use accounts_core::services::{NotificationSender, PasswordHasher};
use accounts_shared::config::CorsConfig;

use crate::handlers::{extract_language, localized_error, validation_message_response};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{activate, forgot_password, register, resend_activation, reset_password};
use crate::routes::health::health_check;
use crate::routes::users::{delete_user, get_user, list_users, update_user};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<R, N, H>(
    app_state: web::Data<AppState<R, N, H>>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(json_config(max_payload_size))
        .app_data(query_config())
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .configure(configure_routes::<R, N, H>)
        .default_service(web::route().to(not_found))
}

/// Register every route of the API
pub fn configure_routes<R, N, H>(cfg: &mut web::ServiceConfig)
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<R, N, H>))
                    .route("/activate", web::post().to(activate::<R, N, H>))
                    .route(
                        "/resend-activation",
                        web::post().to(resend_activation::<R, N, H>),
                    )
                    .route("/forgot-password", web::post().to(forgot_password::<R, N, H>))
                    .route("/reset-password", web::post().to(reset_password::<R, N, H>)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(list_users::<R, N, H>))
                    .route("/{id}", web::get().to(get_user::<R, N, H>))
                    .route("/{id}", web::patch().to(update_user::<R, N, H>))
                    .route("/{id}", web::delete().to(delete_user::<R, N, H>)),
            ),
    );
}

/// JSON extractor settings; malformed bodies become `VALIDATION_ERROR`
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            let response = validation_message_response(&err.to_string(), extract_language(req));
            InternalError::from_response(err, response).into()
        })
}

/// Query extractor settings; unparsable query strings become `VALIDATION_ERROR`
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        let response = validation_message_response(&err.to_string(), extract_language(req));
        InternalError::from_response(err, response).into()
    })
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    localized_error("not_found", &HashMap::new(), extract_language(&req))
}
