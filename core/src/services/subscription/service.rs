use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::traits::SubscriptionServiceTrait;
use crate::clock::Clock;
use crate::domain::entities::subscription::{Subscription, MAX_NAME_LENGTH};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{SubscriptionRepository, UserRepository};

pub struct SubscriptionService<S: SubscriptionRepository, U: UserRepository> {
    subscription_repository: Arc<S>,
    user_repository: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<S: SubscriptionRepository, U: UserRepository> SubscriptionService<S, U> {
    pub fn new(subscription_repository: Arc<S>, user_repository: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            subscription_repository,
            user_repository,
            clock,
        }
    }

    async fn ensure_user_exists(&self, user_id: Uuid) -> DomainResult<()> {
        match self.user_repository.find_by_id(user_id).await {
            Ok(_) => Ok(()),
            Err(DomainError::NotFound { .. }) => Err(AuthError::UserNotFound.into()),
            Err(e) => Err(e),
        }
    }
}

/// Domain-level guard on name and amount
fn validate_fields(name: &str, amount: f64) -> DomainResult<()> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            min: 1,
            max: MAX_NAME_LENGTH,
            actual: length,
        }
        .into());
    }

    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: "0".to_string(),
            max: "inf".to_string(),
        }
        .into());
    }

    Ok(())
}

#[async_trait]
impl<S: SubscriptionRepository, U: UserRepository> SubscriptionServiceTrait
    for SubscriptionService<S, U>
{
    async fn create(&self, user_id: Uuid, name: &str, amount: f64) -> DomainResult<Subscription> {
        validate_fields(name, amount)?;
        self.ensure_user_exists(user_id).await?;

        let subscription = Subscription::new(user_id, name.to_string(), amount, self.clock.now());
        let subscription = self.subscription_repository.create(subscription).await?;

        tracing::info!(
            user_id = %user_id,
            subscription_id = %subscription.id,
            event = "subscription_created",
            "Subscription created"
        );
        Ok(subscription)
    }

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Subscription>> {
        self.ensure_user_exists(user_id).await?;
        self.subscription_repository.find_by_user(user_id).await
    }

    async fn get_by_id(&self, id: Uuid) -> DomainResult<Subscription> {
        self.subscription_repository.find_by_id(id).await
    }

    async fn update(&self, id: Uuid, name: &str, amount: f64) -> DomainResult<Subscription> {
        validate_fields(name, amount)?;

        let mut subscription = self.subscription_repository.find_by_id(id).await?;
        subscription.apply_update(name.to_string(), amount, self.clock.now());
        let subscription = self.subscription_repository.update(subscription).await?;

        tracing::info!(subscription_id = %id, event = "subscription_updated", "Subscription updated");
        Ok(subscription)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.subscription_repository.delete(id, self.clock.now()).await?;
        tracing::info!(subscription_id = %id, event = "subscription_deleted", "Subscription deleted");
        Ok(())
    }
}
