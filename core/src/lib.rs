//! # ClarityFin Core
//!
//! Domain layer for the ClarityFin backend: entities, the error taxonomy,
//! repository contracts with in-memory implementations, the credential, OTP
//! and subscription services, and the use cases that compose them.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod usecases;

// Re-export commonly used types for convenience
pub use clock::{Clock, MockClock, SystemClock};
pub use domain::{OtpCode, SessionToken, Subscription, SubscriptionStatus, User};
pub use errors::{AuthError, DomainError, DomainResult, OtpError, ValidationError};
pub use repositories::{OtpRepository, SubscriptionRepository, UserRepository};
pub use services::{
    CredentialService, CredentialServiceTrait, OtpService, OtpServiceTrait, SmsServiceTrait,
    SubscriptionService, SubscriptionServiceTrait, TokenService,
};
pub use usecases::{
    AuthInteractor, AuthUseCase, OtpInteractor, OtpUseCase, SubscriptionInteractor,
    SubscriptionUseCase,
};
