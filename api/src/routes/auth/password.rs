use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use accounts_core::repositories::AccountRepository;
use accounts_core::services::{NotificationSender, PasswordHasher};
use accounts_shared::types::ApiResponse;
use accounts_shared::utils::mask_email;

use crate::dto::auth::{EmailRequest, ForgotPasswordResponse, ResetPasswordRequest, ResetPasswordResponse};
use crate::handlers::{domain_error_response, extract_language, validation_error_response};
use crate::i18n::success_message;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/forgot-password
///
/// Mails a password reset code. Works for active and inactive accounts.
pub async fn forgot_password<R, N, H>(
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

    tracing::info!(email = %mask_email(&request.email), "Processing forgot password request");

    match state.account_service.request_password_reset(&request.email).await {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(ForgotPasswordResponse {
                id: result.id,
                email: result.email,
            })
            .with_message(success_message("reset_requested", lang)),
        ),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/v1/auth/reset-password
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jane@example.com",
///     "code": "5f0c...",
///     "password": "newpass1",
///     "confirmPassword": "newpass1"
/// }
/// ```
pub async fn reset_password<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    request: web::Json<ResetPasswordRequest>,
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

    match state.account_service.complete_password_reset(request.into()).await {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(ResetPasswordResponse {
                success: result.success,
            })
            .with_message(success_message("password_changed", lang)),
        ),
        Err(error) => domain_error_response(&error, lang),
    }
}
