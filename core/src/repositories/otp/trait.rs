//! OTP repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::otp_code::OtpCode;
use crate::errors::DomainResult;

/// Persistence contract for one-time codes.
///
/// Several pending codes may exist for the same phone number at once.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    async fn create(&self, otp: OtpCode) -> DomainResult<OtpCode>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<OtpCode>;

    /// Find an unused record for `phone_number` + `code` with `expires_at > now`
    async fn find_active(
        &self,
        phone_number: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<OtpCode>;

    /// Flip `is_used` in a single conditional write.
    ///
    /// Returns `true` only for the call that consumed the record; a record
    /// that is already used or has expired at `now` is left untouched and
    /// yields `false`.
    async fn mark_as_used(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<bool>;

    /// Physically remove records that expired before `now`; returns the count
    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64>;
}
