//! Application state and factory
//!
//! `AppState` holds the explicitly constructed, dependency-injected service
//! instances; `create_app` wires middleware and routes around it. There is
//! no process-wide mutable state: everything a request needs travels
//! through the state handle.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::NormalizePath, web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use ch_core::repositories::{ContactRepository, HealthProbe, UserRepository};
use ch_core::services::auth::AuthService;
use ch_core::services::contact::ContactService;
use ch_core::services::user::{AvatarProvider, UserService};
use ch_shared::config::RateLimitConfig;

use crate::middleware::cors::create_cors;
use crate::middleware::{IdentityResolver, RateLimiter, RequireAuth};
use crate::routes::{auth, contacts, health, users};

/// Shared services handed to every request
pub struct AppState<U, C, A>
where
    U: UserRepository,
    C: ContactRepository,
    A: AvatarProvider,
{
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U, A>>,
    pub contact_service: Arc<ContactService<C>>,
    pub health: Arc<dyn HealthProbe>,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, C, A>(
    state: web::Data<AppState<U, C, A>>,
    identity: Arc<dyn IdentityResolver>,
    rate_limit: RateLimitConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    App::new()
        // Application state
        .app_data(state)
        .app_data(web::Data::new(identity))
        // Middleware (the last wrap runs first)
        .wrap(create_cors())
        .wrap(TracingLogger::default())
        .wrap(NormalizePath::trim())
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route("", web::get().to(health::health_check::<U, C, A>))
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup::<U, C, A>))
                        .route("/login", web::post().to(auth::login::<U, C, A>))
                        .route(
                            "/confirm/{token}",
                            web::get().to(auth::confirm_email::<U, C, A>),
                        ),
                )
                .service(
                    web::scope("/users")
                        .wrap(RequireAuth)
                        .wrap(RateLimiter::new(rate_limit))
                        .route("/me", web::get().to(users::me)),
                )
                .service(
                    web::scope("/contacts")
                        .wrap(RequireAuth)
                        .route("", web::get().to(contacts::search_contacts::<U, C, A>))
                        .route("", web::post().to(contacts::create_contact::<U, C, A>))
                        .route(
                            "/birthdays",
                            web::get().to(contacts::upcoming_birthdays::<U, C, A>),
                        )
                        .route("/{id}", web::get().to(contacts::get_contact::<U, C, A>))
                        .route("/{id}", web::patch().to(contacts::update_contact::<U, C, A>))
                        .route(
                            "/{id}",
                            web::delete().to(contacts::delete_contact::<U, C, A>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found",
    }))
}
