use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::subscription::Subscription;
use crate::errors::DomainResult;

/// Subscription business rules consumed by the orchestration layer.
///
/// Ownership is checked at creation only; `update` and `delete` act on any
/// live subscription id.
#[async_trait]
pub trait SubscriptionServiceTrait: Send + Sync {
    async fn create(&self, user_id: Uuid, name: &str, amount: f64) -> DomainResult<Subscription>;

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Subscription>>;

    async fn get_by_id(&self, id: Uuid) -> DomainResult<Subscription>;

    async fn update(&self, id: Uuid, name: &str, amount: f64) -> DomainResult<Subscription>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
