use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::services::otp::SmsServiceTrait;

/// Captures outgoing codes instead of sending them
#[derive(Default)]
pub struct RecordingSmsService {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingSmsService {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub async fn last_code_for(&self, phone: &str) -> Option<String> {
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|(p, _)| p == phone)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl SmsServiceTrait for RecordingSmsService {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if self.fail {
            return Err("gateway unavailable".to_string());
        }
        let mut sent = self.sent.lock().await;
        sent.push((phone.to_string(), code.to_string()));
        Ok(format!("msg-{}", sent.len()))
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}
