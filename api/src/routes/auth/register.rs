use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use accounts_core::repositories::AccountRepository;
use accounts_core::services::{NotificationSender, PasswordHasher};
use accounts_shared::types::ApiResponse;
use accounts_shared::utils::mask_email;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::{domain_error_response, extract_language, validation_error_response};
use crate::i18n::success_message;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates an inactive account and mails its activation code.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Jane",
///     "email": "jane@example.com",
///     "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the new account id. A failed activation mail does not
/// fail the request; `notificationDelivered` is `false` instead.
pub async fn register<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    let lang = extract_language(&req);
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, lang);
    }

    tracing::info!(email = %mask_email(&request.email), "Processing register request");

    match state.account_service.register(request.into()).await {
        Ok(result) => {
            let message_key = if result.notification_delivered {
                "registered"
            } else {
                "registered_without_mail"
            };
            let body = ApiResponse::success(RegisterResponse {
                id: result.id,
                notification_delivered: result.notification_delivered,
            })
            .with_message(success_message(message_key, lang));
            HttpResponse::Created().json(body)
        }
        Err(error) => domain_error_response(&error, lang),
    }
}
