use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::DomainResult;
use crate::services::{OtpServiceTrait, SendCodeResult};

#[async_trait]
pub trait OtpUseCase: Send + Sync {
    async fn send_code(&self, phone: &str) -> DomainResult<SendCodeResult>;

    async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<()>;
}

pub struct OtpInteractor<O: OtpServiceTrait> {
    otp: Arc<O>,
}

impl<O: OtpServiceTrait> OtpInteractor<O> {
    pub fn new(otp: Arc<O>) -> Self {
        Self { otp }
    }
}

#[async_trait]
impl<O: OtpServiceTrait> OtpUseCase for OtpInteractor<O> {
    async fn send_code(&self, phone: &str) -> DomainResult<SendCodeResult> {
        self.otp.generate(phone).await
    }

    async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<()> {
        self.otp.verify(phone, code).await
    }
}
