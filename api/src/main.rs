//! ContactHub API server entry point.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use ch_core::services::auth::AuthService;
use ch_core::services::contact::ContactService;
use ch_core::services::token::TokenService;
use ch_core::services::user::UserService;
use ch_infra::{
    create_pool, GravatarProvider, PgContactRepository, PgHealthProbe, PgUserRepository,
};
use ch_shared::config::AppConfig;

use ch_api::app::{create_app, AppState};
use ch_api::middleware::IdentityResolver;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("JWT_SECRET_KEY is the insecure default; set it before deploying");
    }

    // Database and repositories
    let pool = create_pool(&config.database).await?;
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let contacts = Arc::new(PgContactRepository::new(pool.clone()));
    let avatars = Arc::new(GravatarProvider::new());

    // Services
    let tokens = TokenService::new(config.auth.jwt.clone());
    let auth_service = Arc::new(AuthService::new(users.clone(), tokens));
    let user_service = Arc::new(UserService::new(users, avatars));
    let contact_service = Arc::new(ContactService::new(contacts));
    let health = Arc::new(PgHealthProbe::new(pool));

    let state = web::Data::new(AppState {
        auth_service: auth_service.clone(),
        user_service,
        contact_service,
        health,
    });
    let identity: Arc<dyn IdentityResolver> = auth_service;

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "starting ContactHub API server");

    let rate_limit = config.rate_limit.clone();
    let server = HttpServer::new(move || {
        create_app(state.clone(), identity.clone(), rate_limit.clone())
    });

    let server = if config.server.workers > 0 {
        server.workers(config.server.workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
