//! Business services containing domain logic.

pub mod credential;
pub mod otp;
pub mod subscription;
pub mod token;

pub use credential::{CredentialService, CredentialServiceConfig, CredentialServiceTrait};
pub use otp::{
    spawn_cleanup_task, OtpService, OtpServiceConfig, OtpServiceTrait, SendCodeResult,
    SmsServiceTrait,
};
pub use subscription::{SubscriptionService, SubscriptionServiceTrait};
pub use token::{TokenService, TokenServiceConfig};
