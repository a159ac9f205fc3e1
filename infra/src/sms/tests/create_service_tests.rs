use cf_shared::{Msg91Config, SmsConfig, SmsProvider};

use crate::sms::create_sms_service;
use crate::InfrastructureError;

#[test]
fn test_log_provider_needs_no_credentials() {
    let service = create_sms_service(&SmsConfig::default()).unwrap();
    assert_eq!(service.provider_name(), "log");
}

#[test]
fn test_unconfigured_twilio_fails_fast() {
    let config = SmsConfig {
        provider: SmsProvider::Twilio,
        ..Default::default()
    };
    assert!(matches!(
        create_sms_service(&config),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_configured_msg91_is_selected() {
    let config = SmsConfig {
        provider: SmsProvider::Msg91,
        msg91: Msg91Config {
            api_key: "key".to_string(),
            sender_id: "CLRFIN".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let service = create_sms_service(&config).unwrap();
    assert_eq!(service.provider_name(), "msg91");
}
