use cf_core::services::otp::SmsServiceTrait;

use crate::sms::{MockSmsService, SmsServiceAdapter};

#[tokio::test]
async fn test_adapter_forwards_verification_code() {
    let sink = MockSmsService::recording();
    let adapter = SmsServiceAdapter::new(Box::new(sink.clone()));

    let id = adapter
        .send_verification_code("+15550001234", "123456")
        .await
        .unwrap();

    assert_eq!(adapter.provider_name(), "log");
    let sent = sink.last_message_for("+15550001234").await.unwrap();
    assert_eq!(sent.message_id, id);
    assert!(sent.message.contains("123456"));
}

#[tokio::test]
async fn test_adapter_flattens_errors_to_strings() {
    let adapter = SmsServiceAdapter::new(Box::new(MockSmsService::failing()));
    let err = adapter
        .send_verification_code("+15550001234", "123456")
        .await
        .unwrap_err();

    assert!(err.contains("simulated delivery failure"));
}
