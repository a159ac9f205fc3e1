//! Route handlers
//!
//! - `auth`: registration (plain and OTP-gated) and login
//! - `otp`: sending and verifying one-time codes
//! - `subscriptions`: bearer-protected subscription CRUD
//! - `health`: liveness probe

pub mod auth;
pub mod health;
pub mod otp;
pub mod subscriptions;
