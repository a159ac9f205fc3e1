//! Orchestration layer composing services per endpoint.
//!
//! Use cases only sequence service calls; business rules stay in the services.

pub mod auth;
pub mod otp;
pub mod subscription;


pub use auth::{AuthInteractor, AuthUseCase};
pub use otp::{OtpInteractor, OtpUseCase};
pub use subscription::{SubscriptionInteractor, SubscriptionUseCase};
