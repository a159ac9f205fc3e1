//! MySQL implementation of the SubscriptionRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cf_core::domain::entities::subscription::{Subscription, SubscriptionStatus};
use cf_core::errors::{DomainError, DomainResult};
use cf_core::repositories::SubscriptionRepository;

use super::{column, parse_uuid, storage_error};

const SUBSCRIPTION_COLUMNS: &str =
    "id, user_id, name, amount, status, created_at, updated_at, deleted_at";

pub struct MySqlSubscriptionRepository {
    pool: MySqlPool,
}

impl MySqlSubscriptionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_subscription(row: &MySqlRow) -> DomainResult<Subscription> {
        let id: String = column(row, "id")?;
        let user_id: String = column(row, "user_id")?;
        let status: String = column(row, "status")?;

        Ok(Subscription {
            id: parse_uuid("subscriptions.id", &id)?,
            user_id: parse_uuid("subscriptions.user_id", &user_id)?,
            name: column(row, "name")?,
            amount: column(row, "amount")?,
            status: status
                .parse::<SubscriptionStatus>()
                .map_err(DomainError::storage)?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
            deleted_at: column(row, "deleted_at")?,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for MySqlSubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> DomainResult<Subscription> {
        let query = r#"
            INSERT INTO subscriptions
                (id, user_id, name, amount, status, created_at, updated_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(subscription.id.to_string())
            .bind(subscription.user_id.to_string())
            .bind(&subscription.name)
            .bind(subscription.amount)
            .bind(subscription.status.as_str())
            .bind(subscription.created_at)
            .bind(subscription.updated_at)
            .bind(subscription.deleted_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("create subscription", e))?;

        Ok(subscription)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Subscription> {
        let query = format!(
            "SELECT {} FROM subscriptions WHERE id = ? AND deleted_at IS NULL LIMIT 1",
            SUBSCRIPTION_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find subscription", e))?;

        match row {
            Some(row) => Self::row_to_subscription(&row),
            None => Err(DomainError::not_found("subscription")),
        }
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Subscription>> {
        let query = format!(
            "SELECT {} FROM subscriptions WHERE user_id = ? AND deleted_at IS NULL ORDER BY created_at",
            SUBSCRIPTION_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("list subscriptions", e))?;

        rows.iter().map(Self::row_to_subscription).collect()
    }

    async fn update(&self, subscription: Subscription) -> DomainResult<Subscription> {
        let query = r#"
            UPDATE subscriptions
            SET name = ?, amount = ?, status = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(&subscription.name)
            .bind(subscription.amount)
            .bind(subscription.status.as_str())
            .bind(subscription.updated_at)
            .bind(subscription.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("update subscription", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("subscription"));
        }

        Ok(subscription)
    }

    async fn delete(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE subscriptions SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("delete subscription", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("subscription"));
        }

        Ok(())
    }
}
