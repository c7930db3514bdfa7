use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use accounts_core::repositories::AccountRepository;
use accounts_core::services::{NotificationSender, PasswordHasher};
use accounts_shared::types::ApiResponse;
use accounts_shared::utils::mask_email;

use crate::dto::auth::{AccountIdResponse, ActivateRequest, EmailRequest};
use crate::handlers::{domain_error_response, extract_language, validation_error_response};
use crate::i18n::success_message;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/activate
///
/// Consumes an activation code. A code can be used once; expired, replaced
/// or unknown codes yield `INVALID_CODE`.
pub async fn activate<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    request: web::Json<ActivateRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    let lang = extract_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, lang);
    }

    match state.account_service.activate(request.code.trim()).await {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(AccountIdResponse { id: result.id })
                .with_message(success_message("activated", lang)),
        ),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/v1/auth/resend-activation
///
/// Mints a fresh activation code for an inactive account; earlier codes stop
/// working.
pub async fn resend_activation<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    request: web::Json<EmailRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    let lang = extract_language(&req);
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, lang);
    }

    tracing::info!(email = %mask_email(&request.email), "Processing resend activation request");

    match state.account_service.resend_activation(&request.email).await {
        Ok(id) => HttpResponse::Ok().json(
            ApiResponse::success(AccountIdResponse { id })
                .with_message(success_message("activation_resent", lang)),
        ),
        Err(error) => domain_error_response(&error, lang),
    }
}
