//! Traits for SMS delivery and the OTP service contract

use async_trait::async_trait;

use super::types::SendCodeResult;
use crate::errors::DomainResult;

/// Delivery channel for verification codes
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a verification code via SMS, returning the provider's message id
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;

    /// Name of the underlying provider, for logs
    fn provider_name(&self) -> &str;
}

/// Contract consumed by the orchestration layer
#[async_trait]
pub trait OtpServiceTrait: Send + Sync {
    /// Persist a fresh pending code and dispatch it
    ///
    /// A dispatch failure yields `OtpError::DispatchFailure`; the record stays
    /// persisted and remains verifiable.
    async fn generate(&self, phone: &str) -> DomainResult<SendCodeResult>;

    /// Consume a pending code
    ///
    /// Wrong, used and expired codes all fail with
    /// `OtpError::InvalidOrExpiredCode`.
    async fn verify(&self, phone: &str, code: &str) -> DomainResult<()>;

    /// Delete records whose expiry has passed
    async fn purge_expired(&self) -> DomainResult<u64>;
}
