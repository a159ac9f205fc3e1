//! Twilio SMS service, the primary provider
//!
//! Single attempt per message; a failure surfaces to the OTP service as a
//! dispatch failure.

use async_trait::async_trait;
use tracing::{debug, error, info};
use twilio::{Client, OutboundMessage};

use cf_shared::phone::mask_phone_number;
use cf_shared::TwilioConfig;

use super::sms_service::{to_e164, SmsService};
use crate::InfrastructureError;

pub struct TwilioSmsService {
    client: Client,
    from_number: String,
}

impl TwilioSmsService {
    pub fn new(config: &TwilioConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            return Err(InfrastructureError::Config(
                "Twilio requires account_sid, auth_token and from_number".to_string(),
            ));
        }
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "Twilio from_number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self {
            client,
            from_number: config.from_number.clone(),
        })
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = to_e164(phone_number)?;
        debug!(to = %mask_phone_number(&to), "Sending SMS via Twilio");

        let outbound = OutboundMessage::new(&self.from_number, &to, message);
        match self.client.send_message(outbound).await {
            Ok(response) => {
                info!(
                    to = %mask_phone_number(&to),
                    sid = %response.sid,
                    "SMS sent via Twilio"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(to = %mask_phone_number(&to), "Twilio send failed: {}", e);
                Err(InfrastructureError::Sms(format!("Twilio send failed: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "twilio"
    }
}
