use actix_web::{web, HttpRequest, HttpResponse};
use std::collections::HashMap;
use validator::Validate;

use accounts_core::repositories::AccountRepository;
use accounts_core::services::{NotificationSender, PasswordHasher};
use accounts_shared::types::ApiResponse;

use crate::dto::user::{DeleteUserResponse, UpdateUserRequest};
use crate::handlers::{
    domain_error_response, extract_language, localized_error, validation_error_response,
};
use crate::i18n::success_message;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    let lang = extract_language(&req);

    match state.account_service.find_by_id(&path).await {
        Ok(Some(account)) => HttpResponse::Ok().json(ApiResponse::success(account)),
        Ok(None) => localized_error("account_not_found", &HashMap::new(), lang),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for PATCH /api/v1/users/{id}
///
/// Merges `name`, `role` and `accountType`. Password, email and activation
/// state cannot be changed here.
pub async fn update_user<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    path: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
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

    match state.account_service.update(&path, request.into()).await {
        Ok(account) => HttpResponse::Ok().json(
            ApiResponse::success(account).with_message(success_message("account_updated", lang)),
        ),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for DELETE /api/v1/users/{id}
///
/// Removing an account that does not exist is not an error; `deleted` is
/// `false` in that case.
pub async fn delete_user<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    let lang = extract_language(&req);

    match state.account_service.remove(&path).await {
        Ok(deleted) => HttpResponse::Ok().json(
            ApiResponse::success(DeleteUserResponse { deleted })
                .with_message(success_message("account_removed", lang)),
        ),
        Err(error) => domain_error_response(&error, lang),
    }
}
