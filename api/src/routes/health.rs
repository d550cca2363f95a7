//! Health check endpoint.

use actix_web::{http::StatusCode, web, HttpResponse};

use ch_core::repositories::{ContactRepository, UserRepository};
use ch_core::services::user::AvatarProvider;

use crate::app::AppState;
use crate::dto::ErrorResponse;

/// Handler for GET /api/v1/
///
/// Round-trips the store probe; an unreachable or misconfigured store
/// reports 500 with a fixed message.
pub async fn health_check<U, C, A>(state: web::Data<AppState<U, C, A>>) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    match state.health.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Welcome to ContactHub!",
        })),
        Err(error) => {
            tracing::error!(%error, "health check failed");
            ErrorResponse::new("database_error", "Error connecting to the database")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
