//! Account endpoints.

use actix_web::HttpResponse;

use crate::dto::UserResponse;
use crate::middleware::CurrentUser;

/// Handler for GET /api/v1/users/me
///
/// Returns the authenticated account. Identity resolution has already run
/// in the `RequireAuth` middleware; this handler only shapes the response.
pub async fn me(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse::from(user.0))
}
