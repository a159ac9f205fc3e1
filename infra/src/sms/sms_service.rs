//! SMS Service Interface
//!
//! Defines the trait implemented by every outbound SMS provider.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};

use crate::InfrastructureError;

/// Validity window quoted in the verification message
pub const CODE_VALIDITY_MINUTES: i64 = 5;

/// SMS service trait for sending text messages
///
/// Implementations:
/// - Twilio SMS API (primary)
/// - MSG91 HTTP API (secondary)
/// - Log sink for development and tests
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message, returning the provider's message id
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Send a verification code using the standard message template
    async fn send_verification_code(
        &self,
        phone_number: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        let message = verification_message(code);
        self.send_sms(phone_number, &message).await
    }

    /// Provider name for logs ("twilio", "msg91", "log")
    fn provider_name(&self) -> &str;

    async fn is_available(&self) -> bool {
        true
    }
}

/// Body of the verification SMS
pub fn verification_message(code: &str) -> String {
    format!(
        "Your ClarityFin verification code is: {}. Valid for {} minutes.",
        code, CODE_VALIDITY_MINUTES
    )
}

/// Normalize a recipient number to E.164 (`+` followed by digits)
///
/// Numbers without a leading `+` are assumed to already carry their country
/// code.
pub fn to_e164(phone: &str) -> Result<String, InfrastructureError> {
    let trimmed = phone.trim();
    let candidate = if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{}", trimmed)
    };

    candidate
        .parse::<PhoneNumber>()
        .map(|parsed| parsed.format().mode(Mode::E164).to_string())
        .map_err(|e| InfrastructureError::Sms(format!("Invalid phone number format: {}", e)))
}
