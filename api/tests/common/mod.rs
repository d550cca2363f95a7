//! Shared setup for the HTTP integration tests: the real router and
//! middleware over in-memory repositories.

use std::sync::Arc;

use actix_web::web;

use ch_api::app::AppState;
use ch_api::middleware::IdentityResolver;
use ch_core::domain::entities::User;
use ch_core::repositories::{MockContactRepository, MockUserRepository, NoopHealthProbe};
use ch_core::services::auth::{hash_password, AuthService};
use ch_core::services::contact::ContactService;
use ch_core::services::token::TokenService;
use ch_core::services::user::{NoopAvatarProvider, UserService};
use ch_shared::config::{JwtConfig, RateLimitConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestAppState = AppState<MockUserRepository, MockContactRepository, NoopAvatarProvider>;

pub struct TestContext {
    pub state: web::Data<TestAppState>,
    pub identity: Arc<dyn IdentityResolver>,
    pub rate_limit: RateLimitConfig,
    pub users: Arc<MockUserRepository>,
    pub auth: Arc<AuthService<MockUserRepository>>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let contacts = Arc::new(MockContactRepository::new());

        let auth = Arc::new(AuthService::new(
            users.clone(),
            TokenService::new(JwtConfig::new(TEST_SECRET)),
        ));
        let user_service = Arc::new(UserService::new(users.clone(), Arc::new(NoopAvatarProvider)));
        let contact_service = Arc::new(ContactService::new(contacts));

        let state = web::Data::new(AppState {
            auth_service: auth.clone(),
            user_service,
            contact_service,
            health: Arc::new(NoopHealthProbe),
        });

        Self {
            state,
            identity: auth.clone(),
            rate_limit: RateLimitConfig::default(),
            users,
            auth,
        }
    }

    /// Seed a verified account and return it
    pub async fn seed_verified_user(&self, email: &str, username: &str, password: &str) -> User {
        let mut user = User::new(
            email.to_string(),
            username.to_string(),
            hash_password(password).unwrap(),
        );
        user.verify();
        self.users.insert(user.clone()).await;
        user
    }

    /// Mint a valid access token for `email`
    pub fn access_token_for(&self, email: &str) -> String {
        TokenService::new(JwtConfig::new(TEST_SECRET))
            .create_access_token(email, None)
            .unwrap()
    }
}
