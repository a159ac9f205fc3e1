//! In-memory implementation of OtpRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp_code::OtpCode;
use crate::errors::{DomainError, DomainResult};

use super::trait_::OtpRepository;

#[derive(Clone, Default)]
pub struct MockOtpRepository {
    codes: Arc<RwLock<HashMap<Uuid, OtpCode>>>,
}

impl MockOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record for a phone number
    pub async fn records_for(&self, phone_number: &str) -> Vec<OtpCode> {
        let codes = self.codes.read().await;
        let mut records: Vec<OtpCode> = codes
            .values()
            .filter(|c| c.phone_number == phone_number)
            .cloned()
            .collect();
        records.sort_by_key(|c| c.created_at);
        records
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn create(&self, otp: OtpCode) -> DomainResult<OtpCode> {
        let mut codes = self.codes.write().await;
        codes.insert(otp.id, otp.clone());
        Ok(otp)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<OtpCode> {
        let codes = self.codes.read().await;
        codes
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("otp code"))
    }

    async fn find_active(
        &self,
        phone_number: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<OtpCode> {
        let codes = self.codes.read().await;
        codes
            .values()
            .filter(|c| c.phone_number == phone_number && c.code == code && c.is_pending(now))
            .max_by_key(|c| c.created_at)
            .cloned()
            .ok_or_else(|| DomainError::not_found("otp code"))
    }

    async fn mark_as_used(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<bool> {
        // the write guard makes check-and-set a single step
        let mut codes = self.codes.write().await;
        match codes.get_mut(&id) {
            Some(record) if record.is_pending(now) => {
                record.is_used = true;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(DomainError::not_found("otp code")),
        }
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|_, c| !c.is_expired(now));
        Ok((before - codes.len()) as u64)
    }
}
