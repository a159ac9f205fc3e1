//! SMS provider configuration

use serde::{Deserialize, Serialize};

/// Delivery channel for verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Primary gateway
    Twilio,
    /// Secondary gateway
    Msg91,
    /// Log sink for environments without a configured provider
    #[serde(alias = "mock", alias = "none")]
    Log,
}

impl Default for SmsProvider {
    fn default() -> Self {
        SmsProvider::Log
    }
}

impl std::fmt::Display for SmsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsProvider::Twilio => write!(f, "twilio"),
            SmsProvider::Msg91 => write!(f, "msg91"),
            SmsProvider::Log => write!(f, "log"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TwilioConfig {
    #[serde(default)]
    pub account_sid: String,
    #[serde(default)]
    pub auth_token: String,
    /// Sender number in E.164 format
    #[serde(default)]
    pub from_number: String,
}

impl TwilioConfig {
    pub fn is_configured(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.from_number.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Msg91Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default = "default_msg91_base_url")]
    pub base_url: String,
}

impl Default for Msg91Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            sender_id: String::new(),
            base_url: default_msg91_base_url(),
        }
    }
}

impl Msg91Config {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.sender_id.is_empty()
    }
}

/// SMS configuration, selected once at startup
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SmsConfig {
    #[serde(default)]
    pub provider: SmsProvider,
    #[serde(default)]
    pub twilio: TwilioConfig,
    #[serde(default)]
    pub msg91: Msg91Config,
}

impl SmsConfig {
    /// Whether the selected provider has the credentials it needs
    pub fn is_provider_configured(&self) -> bool {
        match self.provider {
            SmsProvider::Twilio => self.twilio.is_configured(),
            SmsProvider::Msg91 => self.msg91.is_configured(),
            SmsProvider::Log => true,
        }
    }
}

fn default_msg91_base_url() -> String {
    String::from("https://api.msg91.com/api/v2/sendsms")
}
