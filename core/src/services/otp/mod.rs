//! One-time passcode issuance and verification
//!
//! Codes are six zero-padded digits, live for five minutes by default and can
//! be consumed once. Several pending codes per phone may coexist; issuing a new
//! one does not invalidate the others.

mod cleanup;
mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use cleanup::spawn_cleanup_task;
pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{OtpServiceTrait, SmsServiceTrait};
pub use types::SendCodeResult;
