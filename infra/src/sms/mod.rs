//! SMS Service Module
//!
//! Outbound SMS providers for verification codes. The provider is selected
//! once at startup from [`SmsConfig`].

pub mod adapter;
pub mod mock_sms;
pub mod msg91;
pub mod sms_service;

#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use adapter::SmsServiceAdapter;
pub use mock_sms::{MockSmsService, SentMessage};
pub use msg91::Msg91SmsService;
pub use sms_service::{to_e164, verification_message, SmsService};

#[cfg(feature = "twilio-sms")]
pub use twilio::TwilioSmsService;

use cf_shared::{SmsConfig, SmsProvider};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create the configured SMS service
///
/// A selected provider without credentials is a configuration error rather
/// than a silent fallback to the log sink.
pub fn create_sms_service(config: &SmsConfig) -> Result<Box<dyn SmsService>, InfrastructureError> {
    let service: Box<dyn SmsService> = match config.provider {
        SmsProvider::Log => {
            tracing::warn!("Using log sink SMS service; codes are not delivered");
            Box::new(MockSmsService::new())
        }
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => Box::new(TwilioSmsService::new(&config.twilio)?),
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => {
            return Err(InfrastructureError::Config(
                "Twilio provider selected but the twilio-sms feature is disabled".to_string(),
            ))
        }
        SmsProvider::Msg91 => Box::new(Msg91SmsService::new(&config.msg91)?),
    };

    tracing::info!(provider = service.provider_name(), "SMS service created");
    Ok(service)
}
