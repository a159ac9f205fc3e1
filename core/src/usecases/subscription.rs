//! Subscription flows keyed on the caller's phone number

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::subscription::Subscription;
use crate::errors::DomainResult;
use crate::services::{CredentialServiceTrait, SubscriptionServiceTrait};

#[async_trait]
pub trait SubscriptionUseCase: Send + Sync {
    /// List the live subscriptions of the user holding `owner_phone`
    async fn list_for_owner(&self, owner_phone: &str) -> DomainResult<Vec<Subscription>>;

    async fn create_for_owner(
        &self,
        owner_phone: &str,
        name: &str,
        amount: f64,
    ) -> DomainResult<Subscription>;

    async fn get(&self, id: Uuid) -> DomainResult<Subscription>;

    async fn update(&self, id: Uuid, name: &str, amount: f64) -> DomainResult<Subscription>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}

pub struct SubscriptionInteractor<C: CredentialServiceTrait, S: SubscriptionServiceTrait> {
    credentials: Arc<C>,
    subscriptions: Arc<S>,
}

impl<C: CredentialServiceTrait, S: SubscriptionServiceTrait> SubscriptionInteractor<C, S> {
    pub fn new(credentials: Arc<C>, subscriptions: Arc<S>) -> Self {
        Self {
            credentials,
            subscriptions,
        }
    }
}

#[async_trait]
impl<C: CredentialServiceTrait, S: SubscriptionServiceTrait> SubscriptionUseCase
    for SubscriptionInteractor<C, S>
{
    async fn list_for_owner(&self, owner_phone: &str) -> DomainResult<Vec<Subscription>> {
        let owner = self.credentials.find_user_by_phone(owner_phone).await?;
        self.subscriptions.list_for_user(owner.id).await
    }

    async fn create_for_owner(
        &self,
        owner_phone: &str,
        name: &str,
        amount: f64,
    ) -> DomainResult<Subscription> {
        let owner = self.credentials.find_user_by_phone(owner_phone).await?;
        self.subscriptions.create(owner.id, name, amount).await
    }

    async fn get(&self, id: Uuid) -> DomainResult<Subscription> {
        self.subscriptions.get_by_id(id).await
    }

    async fn update(&self, id: Uuid, name: &str, amount: f64) -> DomainResult<Subscription> {
        self.subscriptions.update(id, name, amount).await
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.subscriptions.delete(id).await
    }
}
