pub mod otp;
pub mod subscription;
pub mod user;

pub use otp::{MockOtpRepository, OtpRepository};
pub use subscription::{MockSubscriptionRepository, SubscriptionRepository};
pub use user::{MockUserRepository, UserRepository};
