//! CORS configuration.

use actix_cors::Cors;
use actix_web::http::header;

/// Create the CORS middleware
///
/// Permissive origins for development; tighten `CORS_ALLOWED_ORIGIN` in
/// production deployments.
pub fn create_cors() -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600);

    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origin) => cors.allowed_origin(&origin),
        Err(_) => cors.allow_any_origin(),
    }
}
