//! Application state, dependency wiring and route table

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use cf_core::clock::Clock;
use cf_core::repositories::{OtpRepository, SubscriptionRepository, UserRepository};
use cf_core::services::{
    CredentialService, CredentialServiceConfig, CredentialServiceTrait, OtpService, OtpServiceConfig, OtpServiceTrait,
    SmsServiceTrait, SubscriptionService, TokenService, TokenServiceConfig,
};
use cf_core::usecases::{
    AuthInteractor, AuthUseCase, OtpInteractor, OtpUseCase, SubscriptionInteractor,
    SubscriptionUseCase,
};
use cf_infra::DatabasePool;
use cf_shared::AppConfig;

use crate::handlers::json_config;
use crate::middleware::JwtAuth;
use crate::routes::{auth, health, otp, subscriptions};

/// Liveness of the storage backend, reported by `GET /health`
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn database_ok(&self) -> bool;
}

#[async_trait]
impl HealthProbe for DatabasePool {
    async fn database_ok(&self) -> bool {
        matches!(self.health_check().await, Ok(true))
    }
}

/// Shared by every worker; handlers only see use-case contracts
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthUseCase>,
    pub otp: Arc<dyn OtpUseCase>,
    pub subscriptions: Arc<dyn SubscriptionUseCase>,
    /// Session token verification for the bearer middleware
    pub credentials: Arc<dyn CredentialServiceTrait>,
    pub health: Arc<dyn HealthProbe>,
}

/// Wired application plus the handles the process owns beyond requests
pub struct AppServices {
    pub state: AppState,
    /// Used by the expired-code cleanup task
    pub otp_service: Arc<dyn OtpServiceTrait>,
}

/// Build services and use cases over the given repositories and SMS channel
pub fn build_services<U, S, O, M>(
    config: &AppConfig,
    users: Arc<U>,
    subscriptions: Arc<S>,
    otps: Arc<O>,
    sms: Arc<M>,
    clock: Arc<dyn Clock>,
    health: Arc<dyn HealthProbe>,
) -> AppServices
where
    U: UserRepository + 'static,
    S: SubscriptionRepository + 'static,
    O: OtpRepository + 'static,
    M: SmsServiceTrait + 'static,
{
    let tokens = Arc::new(TokenService::new(
        TokenServiceConfig::from(&config.auth),
        Arc::clone(&clock),
    ));

    let credentials = Arc::new(CredentialService::new(
        Arc::clone(&users),
        tokens,
        Arc::clone(&clock),
        CredentialServiceConfig::from(&config.auth),
    ));

    let otp_service = Arc::new(OtpService::new(
        otps,
        sms,
        Arc::clone(&clock),
        OtpServiceConfig::from(&config.otp),
    ));

    let subscription_service = Arc::new(SubscriptionService::new(subscriptions, users, clock));

    let state = AppState {
        auth: Arc::new(AuthInteractor::new(
            Arc::clone(&credentials),
            Arc::clone(&otp_service),
        )),
        otp: Arc::new(OtpInteractor::new(Arc::clone(&otp_service))),
        subscriptions: Arc::new(SubscriptionInteractor::new(
            Arc::clone(&credentials),
            subscription_service,
        )),
        credentials,
        health,
    };

    AppServices { state, otp_service }
}

/// Route table, shared by the binary and the integration tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/register/otp", web::post().to(auth::register_with_otp))
                        .route("/login", web::post().to(auth::login)),
                )
                .service(
                    web::scope("/otp")
                        .route("/send", web::post().to(otp::send_code))
                        .route("/verify", web::post().to(otp::verify_code)),
                )
                .service(
                    web::scope("/subscriptions")
                        .wrap(JwtAuth::new())
                        .route("", web::get().to(subscriptions::list))
                        .route("", web::post().to(subscriptions::create))
                        .route("/{id}", web::get().to(subscriptions::get))
                        .route("/{id}", web::put().to(subscriptions::update))
                        .route("/{id}", web::delete().to(subscriptions::delete)),
                ),
        );
}
