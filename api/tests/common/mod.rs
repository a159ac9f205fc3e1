//! In-memory application wiring shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use cf_api::{build_services, AppServices, HealthProbe};
use cf_core::clock::MockClock;
use cf_core::repositories::{MockOtpRepository, MockSubscriptionRepository, MockUserRepository};
use cf_core::services::{TokenService, TokenServiceConfig};
use cf_infra::sms::{MockSmsService, SmsServiceAdapter};
use cf_shared::{AppConfig, Environment};

pub struct StaticHealth(pub bool);

#[async_trait]
impl HealthProbe for StaticHealth {
    async fn database_ok(&self) -> bool {
        self.0
    }
}

pub struct TestApp {
    pub services: AppServices,
    pub clock: Arc<MockClock>,
    pub sms: MockSmsService,
    pub otps: Arc<MockOtpRepository>,
}

impl TestApp {
    /// Register `phone` directly through the use case and return its header
    pub async fn registered_bearer(&self, phone: &str) -> String {
        self.services
            .state
            .auth
            .register(phone, "secret1")
            .await
            .expect("registration should succeed");
        let session = self
            .services
            .state
            .auth
            .login(phone, "secret1")
            .await
            .expect("login should succeed");
        format!("Bearer {}", session.token)
    }

    /// Sign a token for `phone` with the application's secret and clock,
    /// whether or not a user holds that phone
    pub fn bearer_for(&self, phone: &str) -> String {
        let tokens = TokenService::new(
            TokenServiceConfig::from(&test_config().auth),
            self.clock.clone(),
        );
        let session = tokens.issue(phone).expect("token issue should succeed");
        format!("Bearer {}", session.token)
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::for_environment(Environment::Development);
    config.auth.jwt_secret = "integration-test-secret-with-enough-length".to_string();
    config.auth.bcrypt_cost = 4;
    config
}

pub fn test_app() -> TestApp {
    test_app_with(MockSmsService::recording(), true)
}

pub fn test_app_with(sms: MockSmsService, database_ok: bool) -> TestApp {
    let clock = Arc::new(MockClock::starting_now());
    let otps = Arc::new(MockOtpRepository::new());

    let services = build_services(
        &test_config(),
        Arc::new(MockUserRepository::new()),
        Arc::new(MockSubscriptionRepository::new()),
        Arc::clone(&otps),
        Arc::new(SmsServiceAdapter::new(Box::new(sms.clone()))),
        clock.clone(),
        Arc::new(StaticHealth(database_ok)),
    );

    TestApp {
        services,
        clock,
        sms,
        otps,
    }
}

/// `App` with the production route table over in-memory state
#[macro_export]
macro_rules! init_app {
    ($test_app:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($test_app.services.state.clone()))
                .configure(cf_api::configure_routes),
        )
        .await
    };
}
