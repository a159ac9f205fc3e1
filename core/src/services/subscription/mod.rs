//! Subscription CRUD rules

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::SubscriptionService;
pub use traits::SubscriptionServiceTrait;
