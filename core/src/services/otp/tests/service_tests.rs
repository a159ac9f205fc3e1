use std::sync::Arc;

use chrono::Duration;

use super::mocks::RecordingSmsService;
use crate::clock::MockClock;
use crate::domain::entities::otp_code::CODE_LENGTH;
use crate::errors::{DomainError, OtpError};
use crate::repositories::MockOtpRepository;
use crate::services::otp::{spawn_cleanup_task, OtpService, OtpServiceConfig, OtpServiceTrait};

const PHONE: &str = "+15551230000";

struct Fixture {
    service: OtpService<MockOtpRepository, RecordingSmsService>,
    repository: Arc<MockOtpRepository>,
    sms: Arc<RecordingSmsService>,
    clock: Arc<MockClock>,
}

fn fixture_with(sms: RecordingSmsService) -> Fixture {
    let repository = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(sms);
    let clock = Arc::new(MockClock::starting_now());
    let service = OtpService::new(
        repository.clone(),
        sms.clone(),
        clock.clone(),
        OtpServiceConfig::default(),
    );
    Fixture {
        service,
        repository,
        sms,
        clock,
    }
}

fn fixture() -> Fixture {
    fixture_with(RecordingSmsService::default())
}

fn is_invalid_code(result: &Result<(), DomainError>) -> bool {
    matches!(result, Err(DomainError::Otp(OtpError::InvalidOrExpiredCode)))
}

#[tokio::test]
async fn test_generate_persists_and_dispatches_six_digit_code() {
    let f = fixture();

    let result = f.service.generate(PHONE).await.unwrap();

    assert_eq!(result.otp.code.len(), CODE_LENGTH);
    assert!(result.otp.code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(result.otp.expires_at - result.otp.created_at, Duration::minutes(5));
    assert_eq!(f.sms.last_code_for(PHONE).await, Some(result.otp.code.clone()));
    assert_eq!(f.repository.records_for(PHONE).await.len(), 1);
}

#[tokio::test]
async fn test_verify_succeeds_exactly_once() {
    let f = fixture();
    let code = f.service.generate(PHONE).await.unwrap().otp.code;

    assert!(f.service.verify(PHONE, &code).await.is_ok());
    assert!(is_invalid_code(&f.service.verify(PHONE, &code).await));
}

#[tokio::test]
async fn test_verify_after_expiry_fails() {
    let f = fixture();
    let code = f.service.generate(PHONE).await.unwrap().otp.code;

    f.clock.advance(Duration::minutes(5));

    assert!(is_invalid_code(&f.service.verify(PHONE, &code).await));
    let records = f.repository.records_for(PHONE).await;
    assert!(!records[0].is_used);
}

#[tokio::test]
async fn test_verify_just_before_expiry_succeeds() {
    let f = fixture();
    let code = f.service.generate(PHONE).await.unwrap().otp.code;

    f.clock.advance(Duration::minutes(4) + Duration::seconds(59));

    assert!(f.service.verify(PHONE, &code).await.is_ok());
}

#[tokio::test]
async fn test_wrong_code_and_wrong_phone_fail() {
    let f = fixture();
    let code = f.service.generate(PHONE).await.unwrap().otp.code;
    let wrong = if code == "000000" { "000001" } else { "000000" };

    assert!(is_invalid_code(&f.service.verify(PHONE, wrong).await));
    assert!(is_invalid_code(&f.service.verify("+15559999999", &code).await));
    assert!(is_invalid_code(&f.service.verify(PHONE, "12ab56").await));

    // failed attempts do not consume the real code
    assert!(f.service.verify(PHONE, &code).await.is_ok());
}

#[tokio::test]
async fn test_dispatch_failure_keeps_record_verifiable() {
    let f = fixture_with(RecordingSmsService::failing());

    let result = f.service.generate(PHONE).await;
    assert!(matches!(
        result,
        Err(DomainError::Otp(OtpError::DispatchFailure { .. }))
    ));

    let records = f.repository.records_for(PHONE).await;
    assert_eq!(records.len(), 1);
    assert!(f.service.verify(PHONE, &records[0].code).await.is_ok());
}

#[tokio::test]
async fn test_multiple_pending_codes_stay_valid() {
    let f = fixture();
    let first = f.service.generate(PHONE).await.unwrap().otp.code;
    let second = f.service.generate(PHONE).await.unwrap().otp.code;

    assert!(f.service.verify(PHONE, &second).await.is_ok());
    if first != second {
        assert!(f.service.verify(PHONE, &first).await.is_ok());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_verification_consumes_once() {
    let f = fixture();
    let code = f.service.generate(PHONE).await.unwrap().otp.code;
    let service = Arc::new(f.service);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let code = code.clone();
            tokio::spawn(async move { service.verify(PHONE, &code).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_purge_expired_removes_only_expired() {
    let f = fixture();
    f.service.generate(PHONE).await.unwrap();
    f.clock.advance(Duration::minutes(10));
    let fresh = f.service.generate(PHONE).await.unwrap().otp.code;

    assert_eq!(f.service.purge_expired().await.unwrap(), 1);
    assert!(f.service.verify(PHONE, &fresh).await.is_ok());
}

#[tokio::test]
async fn test_cleanup_task_survives_zero_interval() {
    let f = fixture();
    f.service.generate(PHONE).await.unwrap();
    f.clock.advance(Duration::minutes(10));

    let repository = f.repository.clone();
    let service: Arc<dyn OtpServiceTrait> = Arc::new(f.service);
    let handle = spawn_cleanup_task(service, std::time::Duration::ZERO);

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    assert!(!handle.is_finished());
    assert!(repository.records_for(PHONE).await.is_empty());
    handle.abort();
}
