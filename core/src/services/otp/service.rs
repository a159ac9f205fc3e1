//! Main OTP service implementation

use std::sync::Arc;

use async_trait::async_trait;
use cf_shared::utils::phone::mask_phone_number;

use super::config::OtpServiceConfig;
use super::traits::{OtpServiceTrait, SmsServiceTrait};
use super::types::SendCodeResult;
use crate::clock::Clock;
use crate::domain::entities::otp_code::{is_well_formed_code, OtpCode};
use crate::errors::{DomainError, DomainResult, OtpError};
use crate::repositories::OtpRepository;

/// Issues one-time codes, persists them and consumes them on verification
pub struct OtpService<O: OtpRepository, S: SmsServiceTrait> {
    otp_repository: Arc<O>,
    sms_service: Arc<S>,
    clock: Arc<dyn Clock>,
    config: OtpServiceConfig,
}

impl<O: OtpRepository, S: SmsServiceTrait> OtpService<O, S> {
    pub fn new(
        otp_repository: Arc<O>,
        sms_service: Arc<S>,
        clock: Arc<dyn Clock>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            otp_repository,
            sms_service,
            clock,
            config,
        }
    }
}

fn invalid_code<T>() -> DomainResult<T> {
    Err(OtpError::InvalidOrExpiredCode.into())
}

#[async_trait]
impl<O: OtpRepository, S: SmsServiceTrait> OtpServiceTrait for OtpService<O, S> {
    async fn generate(&self, phone: &str) -> DomainResult<SendCodeResult> {
        let masked = mask_phone_number(phone);
        let otp = OtpCode::new(
            phone.to_string(),
            self.clock.now(),
            self.config.code_expiration_minutes,
        );
        let otp = self.otp_repository.create(otp).await?;

        tracing::info!(
            phone = %masked,
            otp_id = %otp.id,
            expires_at = %otp.expires_at,
            event = "otp_generated",
            "Verification code generated"
        );

        match self
            .sms_service
            .send_verification_code(phone, &otp.code)
            .await
        {
            Ok(message_id) => {
                tracing::info!(
                    phone = %masked,
                    provider = self.sms_service.provider_name(),
                    message_id = %message_id,
                    event = "otp_dispatched",
                    "Verification code sent"
                );
                Ok(SendCodeResult { otp, message_id })
            }
            Err(reason) => {
                tracing::error!(
                    phone = %masked,
                    provider = self.sms_service.provider_name(),
                    otp_id = %otp.id,
                    error = %reason,
                    event = "otp_dispatch_failed",
                    "Failed to send verification code"
                );
                Err(OtpError::DispatchFailure { reason }.into())
            }
        }
    }

    async fn verify(&self, phone: &str, code: &str) -> DomainResult<()> {
        let masked = mask_phone_number(phone);
        if !is_well_formed_code(code) {
            tracing::info!(phone = %masked, event = "otp_rejected", "Malformed verification code");
            return invalid_code();
        }

        let now = self.clock.now();
        let record = match self.otp_repository.find_active(phone, code, now).await {
            Ok(record) => record,
            Err(DomainError::NotFound { .. }) => {
                tracing::info!(phone = %masked, event = "otp_rejected", "No pending code matched");
                return invalid_code();
            }
            Err(e) => return Err(e),
        };

        match self.otp_repository.mark_as_used(record.id, now).await {
            Ok(true) => {
                tracing::info!(phone = %masked, otp_id = %record.id, event = "otp_verified", "Verification code consumed");
                Ok(())
            }
            Ok(false) | Err(DomainError::NotFound { .. }) => {
                tracing::warn!(phone = %masked, otp_id = %record.id, event = "otp_rejected", "Code consumed concurrently");
                invalid_code()
            }
            Err(e) => Err(e),
        }
    }

    async fn purge_expired(&self) -> DomainResult<u64> {
        let removed = self.otp_repository.delete_expired(self.clock.now()).await?;
        if removed > 0 {
            tracing::info!(removed, event = "otp_purged", "Deleted expired verification codes");
        }
        Ok(removed)
    }
}
