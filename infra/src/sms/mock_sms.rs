//! Log sink SMS service
//!
//! Writes outgoing messages to the tracing log instead of delivering them.
//! A recording sink additionally keeps them in memory so tests can read the
//! dispatched codes back; the sink built by [`MockSmsService::new`] keeps
//! nothing beyond a counter.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use cf_shared::phone::mask_phone_number;

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// A message captured by [`MockSmsService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub phone_number: String,
    pub message: String,
    pub message_id: String,
}

#[derive(Clone, Default)]
pub struct MockSmsService {
    record: bool,
    message_count: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
    sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that retains every sent message
    pub fn recording() -> Self {
        Self {
            record: true,
            ..Self::default()
        }
    }

    /// A recording sink whose every send fails
    pub fn failing() -> Self {
        let service = Self::recording();
        service.set_simulate_failure(true);
        service
    }

    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub async fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }

    /// Most recent message sent to `phone_number`
    pub async fn last_message_for(&self, phone_number: &str) -> Option<SentMessage> {
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|m| m.phone_number == phone_number)
            .cloned()
    }

    /// Six-digit code contained in the most recent message to `phone_number`
    pub async fn last_code_for(&self, phone_number: &str) -> Option<String> {
        let message = self.last_message_for(phone_number).await?;
        message
            .message
            .split(|c: char| !c.is_ascii_digit())
            .find(|token| token.len() == 6)
            .map(str::to_string)
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                phone = %mask_phone_number(phone_number),
                "Simulated SMS delivery failure"
            );
            return Err(InfrastructureError::Sms("simulated delivery failure".to_string()));
        }

        let message_id = format!("log_{}", Uuid::new_v4());
        info!(
            phone = %mask_phone_number(phone_number),
            message_id = %message_id,
            body = %message,
            "SMS written to log sink"
        );

        if self.record {
            self.sent.lock().await.push(SentMessage {
                phone_number: phone_number.to_string(),
                message: message.to_string(),
                message_id: message_id.clone(),
            });
        }
        self.message_count.fetch_add(1, Ordering::SeqCst);

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "log"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
