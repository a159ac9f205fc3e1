//! Periodic deletion of expired verification codes

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::traits::OtpServiceTrait;

const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn a task that purges expired codes every `interval`
///
/// Intervals shorter than one second are raised to one second.
pub fn spawn_cleanup_task(service: Arc<dyn OtpServiceTrait>, interval: Duration) -> JoinHandle<()> {
    let interval = interval.max(MIN_INTERVAL);
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "OTP cleanup task started");
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            if let Err(e) = service.purge_expired().await {
                error!(error = %e, "OTP cleanup cycle failed");
            }
        }
    })
}
