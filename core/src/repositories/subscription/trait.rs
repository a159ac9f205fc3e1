//! Subscription repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::subscription::Subscription;
use crate::errors::DomainResult;

/// Persistence contract for subscriptions; soft-deleted rows are never returned
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn create(&self, subscription: Subscription) -> DomainResult<Subscription>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Subscription>;

    /// All live subscriptions owned by a user, in no particular order
    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Subscription>>;

    /// Overwrite name, amount and status of an existing subscription
    async fn update(&self, subscription: Subscription) -> DomainResult<Subscription>;

    /// Soft delete, stamping `deleted_at` with `now`
    async fn delete(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<()>;
}
