//! Domain entities representing core business objects.

pub mod otp_code;
pub mod session;
pub mod subscription;
pub mod user;

pub use otp_code::{OtpCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
pub use session::{Claims, SessionToken, SESSION_TOKEN_TTL_HOURS};
pub use subscription::{Subscription, SubscriptionStatus, MAX_NAME_LENGTH};
pub use user::User;
