use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use accounts_core::repositories::AccountRepository;
use accounts_core::services::{NotificationSender, PasswordHasher};
use accounts_shared::types::ApiResponse;

use crate::dto::user::ListUsersQuery;
use crate::handlers::{domain_error_response, extract_language, validation_error_response};
use crate::routes::AppState;

/// Handler for GET /api/v1/users
///
/// Query parameters: `current`, `pageSize`, `name`, `email`, `role`,
/// `accountType`, `isActive` and `sort` (e.g. `-createdAt`).
///
/// # Response
///
/// ```json
/// {
///     "success": true,
///     "data": {
///         "meta": { "current": 1, "pageSize": 10, "pages": 1, "total": 3 },
///         "results": [ ... ]
///     }
/// }
/// ```
pub async fn list_users<R, N, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, H>>,
    query: web::Query<ListUsersQuery>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    N: NotificationSender + 'static,
    H: PasswordHasher + 'static,
{
    let lang = extract_language(&req);
    let query = query.into_inner();

    if let Err(errors) = query.validate() {
        return validation_error_response(&errors, lang);
    }

    let query = match query.into_query() {
        Ok(query) => query,
        Err(error) => return domain_error_response(&error, lang),
    };

    match state.account_service.list(query).await {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(page)),
        Err(error) => domain_error_response(&error, lang),
    }
}
