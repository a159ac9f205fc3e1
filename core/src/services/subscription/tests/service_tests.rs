use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::clock::{Clock, MockClock};
use crate::domain::entities::subscription::SubscriptionStatus;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockSubscriptionRepository, MockUserRepository, UserRepository};
use crate::services::subscription::{SubscriptionService, SubscriptionServiceTrait};

type Service = SubscriptionService<MockSubscriptionRepository, MockUserRepository>;

async fn fixture() -> (Service, Uuid) {
    let users = Arc::new(MockUserRepository::new());
    let user = users
        .create(User::new("+15551230000".into(), "hash".into(), Utc::now()))
        .await
        .unwrap();
    let service = SubscriptionService::new(
        Arc::new(MockSubscriptionRepository::new()),
        users,
        Arc::new(MockClock::starting_now()),
    );
    (service, user.id)
}

fn is_user_not_found<T>(result: &Result<T, DomainError>) -> bool {
    matches!(result, Err(DomainError::Auth(AuthError::UserNotFound)))
}

#[tokio::test]
async fn test_create_and_list() {
    let (service, user_id) = fixture().await;

    assert!(service.list_for_user(user_id).await.unwrap().is_empty());

    let created = service.create(user_id, "Netflix", 199.0).await.unwrap();
    assert_eq!(created.user_id, user_id);
    assert_eq!(created.amount, 199.0);
    assert_eq!(created.status, SubscriptionStatus::Active);

    let listed = service.list_for_user(user_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
}

#[tokio::test]
async fn test_unknown_user_fails_for_create_and_list() {
    let (service, _) = fixture().await;
    let stranger = Uuid::new_v4();

    assert!(is_user_not_found(&service.create(stranger, "Netflix", 199.0).await));
    assert!(is_user_not_found(&service.list_for_user(stranger).await));
}

#[tokio::test]
async fn test_get_missing_subscription_is_not_found() {
    let (service, _) = fixture().await;
    let result = service.get_by_id(Uuid::new_v4()).await;
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let (service, user_id) = fixture().await;
    let created = service.create(user_id, "Netflix", 199.0).await.unwrap();

    let updated = service.update(created.id, "Netflix Premium", 649.0).await.unwrap();

    assert_eq!(updated.name, "Netflix Premium");
    assert_eq!(updated.amount, 649.0);
    assert_eq!(service.get_by_id(created.id).await.unwrap().amount, 649.0);
}

#[tokio::test]
async fn test_delete_is_soft_and_hides_record() {
    let (service, user_id) = fixture().await;
    let created = service.create(user_id, "Netflix", 199.0).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert!(service.get_by_id(created.id).await.unwrap_err().is_not_found());
    assert!(service.list_for_user(user_id).await.unwrap().is_empty());
    assert!(service.delete(created.id).await.unwrap_err().is_not_found());
    assert!(service.update(created.id, "x", 1.0).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_invalid_fields_are_rejected() {
    let (service, user_id) = fixture().await;

    assert!(matches!(
        service.create(user_id, "", 10.0).await,
        Err(DomainError::Validation(_))
    ));
    assert!(matches!(
        service.create(user_id, &"x".repeat(101), 10.0).await,
        Err(DomainError::Validation(_))
    ));
    assert!(matches!(
        service.create(user_id, "Netflix", -1.0).await,
        Err(DomainError::Validation(_))
    ));
    assert!(service.create(user_id, "Free tier", 0.0).await.is_ok());
}

#[tokio::test]
async fn test_delete_stamps_time_from_clock() {
    let users = Arc::new(MockUserRepository::new());
    let user = users
        .create(User::new("+15551230000".into(), "hash".into(), Utc::now()))
        .await
        .unwrap();
    let repository = Arc::new(MockSubscriptionRepository::new());
    let clock = Arc::new(MockClock::starting_now());
    let service = SubscriptionService::new(repository.clone(), users, clock.clone());

    let created = service.create(user.id, "Netflix", 199.0).await.unwrap();
    clock.advance(chrono::Duration::days(3));
    service.delete(created.id).await.unwrap();

    assert_eq!(repository.deleted_at(created.id).await, Some(clock.now()));
}
