use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;
use validator::Validate;

use cf_core::domain::entities::subscription::{Subscription, SubscriptionStatus};

/// Body of both `POST /subscriptions` and `PUT /subscriptions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscriptionRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Largest magnitude below which every whole `f64` is an exact integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole amounts are written without a fractional part (`199`, not `199.0`)
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            user_id: subscription.user_id,
            name: subscription.name,
            amount: subscription.amount,
            status: subscription.status,
            created_at: subscription.created_at,
            updated_at: subscription.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<SubscriptionResponse>,
    pub total: usize,
}

impl From<Vec<Subscription>> for SubscriptionListResponse {
    fn from(subscriptions: Vec<Subscription>) -> Self {
        let subscriptions: Vec<SubscriptionResponse> =
            subscriptions.into_iter().map(Into::into).collect();
        Self {
            total: subscriptions.len(),
            subscriptions,
        }
    }
}
