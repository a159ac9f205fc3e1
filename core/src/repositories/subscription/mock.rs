//! In-memory implementation of SubscriptionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::subscription::Subscription;
use crate::errors::{DomainError, DomainResult};

use super::trait_::SubscriptionRepository;

#[derive(Clone, Default)]
pub struct MockSubscriptionRepository {
    subscriptions: Arc<RwLock<HashMap<Uuid, Subscription>>>,
}

impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deletion stamp of a stored row, visible even after soft delete
    pub async fn deleted_at(&self, id: Uuid) -> Option<DateTime<Utc>> {
        self.subscriptions.read().await.get(&id)?.deleted_at
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> DomainResult<Subscription> {
        let mut subscriptions = self.subscriptions.write().await;
        if subscriptions.contains_key(&subscription.id) {
            return Err(DomainError::storage("duplicate subscription id"));
        }
        subscriptions.insert(subscription.id, subscription.clone());
        Ok(subscription)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Subscription> {
        let subscriptions = self.subscriptions.read().await;
        subscriptions
            .get(&id)
            .filter(|s| !s.is_deleted())
            .cloned()
            .ok_or_else(|| DomainError::not_found("subscription"))
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Subscription>> {
        let subscriptions = self.subscriptions.read().await;
        let mut owned: Vec<Subscription> = subscriptions
            .values()
            .filter(|s| s.user_id == user_id && !s.is_deleted())
            .cloned()
            .collect();
        owned.sort_by_key(|s| s.created_at);
        Ok(owned)
    }

    async fn update(&self, subscription: Subscription) -> DomainResult<Subscription> {
        let mut subscriptions = self.subscriptions.write().await;
        match subscriptions.get(&subscription.id) {
            Some(existing) if !existing.is_deleted() => {
                subscriptions.insert(subscription.id, subscription.clone());
                Ok(subscription)
            }
            _ => Err(DomainError::not_found("subscription")),
        }
    }

    async fn delete(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<()> {
        let mut subscriptions = self.subscriptions.write().await;
        match subscriptions.get_mut(&id) {
            Some(subscription) if !subscription.is_deleted() => {
                subscription.soft_delete(now);
                Ok(())
            }
            _ => Err(DomainError::not_found("subscription")),
        }
    }
}
