//! MSG91 SMS service, the secondary provider
//!
//! Talks to the MSG91 `sendsms` HTTP endpoint with reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use cf_shared::phone::mask_phone_number;
use cf_shared::Msg91Config;

use super::sms_service::{to_e164, SmsService};
use crate::InfrastructureError;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const TRANSACTIONAL_ROUTE: &str = "4";

#[derive(Debug, Serialize)]
struct SendSmsRequest<'a> {
    sender: &'a str,
    route: &'a str,
    country: &'a str,
    sms: Vec<SmsItem<'a>>,
}

#[derive(Debug, Serialize)]
struct SmsItem<'a> {
    message: &'a str,
    to: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SendSmsResponse {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

pub struct Msg91SmsService {
    client: Client,
    config: Msg91Config,
}

impl Msg91SmsService {
    pub fn new(config: &Msg91Config) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            return Err(InfrastructureError::Config(
                "MSG91 requires api_key and sender_id".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        info!(sender_id = %config.sender_id, "MSG91 SMS service initialized");

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl SmsService for Msg91SmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = to_e164(phone_number)?;
        let body = SendSmsRequest {
            sender: &self.config.sender_id,
            route: TRANSACTIONAL_ROUTE,
            country: "0",
            sms: vec![SmsItem {
                message,
                to: vec![to.trim_start_matches('+').to_string()],
            }],
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .header("authkey", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(to = %mask_phone_number(&to), %status, "MSG91 send failed: {}", text);
            return Err(InfrastructureError::Sms(format!(
                "MSG91 returned {}: {}",
                status, text
            )));
        }

        let parsed: SendSmsResponse = response.json().await?;
        if parsed.kind != "success" {
            error!(to = %mask_phone_number(&to), "MSG91 rejected message: {}", parsed.message);
            return Err(InfrastructureError::Sms(format!(
                "MSG91 rejected message: {}",
                parsed.message
            )));
        }

        info!(
            to = %mask_phone_number(&to),
            request_id = %parsed.message,
            "SMS sent via MSG91"
        );
        Ok(parsed.message)
    }

    fn provider_name(&self) -> &str {
        "msg91"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_msg91_is_rejected() {
        let result = Msg91SmsService::new(&Msg91Config::default());
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let body = SendSmsRequest {
            sender: "CLRFIN",
            route: TRANSACTIONAL_ROUTE,
            country: "0",
            sms: vec![SmsItem {
                message: "hello",
                to: vec!["919876543210".to_string()],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["sender"], "CLRFIN");
        assert_eq!(json["sms"][0]["to"][0], "919876543210");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let config = Msg91Config {
            api_key: "key".to_string(),
            sender_id: "CLRFIN".to_string(),
            base_url: "http://127.0.0.1:9/sendsms".to_string(),
        };
        let service = Msg91SmsService::new(&config).unwrap();
        let result = service.send_sms("+919876543210", "hello").await;
        assert!(matches!(result, Err(InfrastructureError::Http(_))));
    }
}
