//! Background refresh of the call list

use crate::controller::DashboardController;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Shortest period the poller accepts
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Periodically refreshes the call list.
///
/// The first refresh runs immediately. Stopping is idempotent and also happens
/// when the poller is dropped, so no tick outlives it.
#[derive(Debug)]
pub struct Poller {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawn the polling task on the current runtime
    pub fn start(controller: DashboardController, every: Duration) -> Self {
        let every = every.max(MIN_POLL_INTERVAL);
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(interval_ms = every.as_millis(), "Call list poller started");

            loop {
                tokio::select! {
                    biased;
                    () = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        tokio::select! {
                            biased;
                            () = cancelled.cancelled() => break,
                            _ = controller.refresh_list() => {}
                        }
                    }
                }
            }

            info!("Call list poller stopped");
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Whether the polling task is still alive
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop polling and wait for the task to exit
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Call list poller exited abnormally");
            }
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCallBackend;
    use calldash_core::{Call, CallStatus};
    use std::sync::Arc;
    use tokio::time::sleep;

    fn controller() -> (Arc<MockCallBackend>, DashboardController) {
        let backend = Arc::new(MockCallBackend::new().with_calls(vec![Call::new(
            1,
            "+15550000001",
            CallStatus::Ringing,
            "2024-01-01T00:00:00Z",
        )]));
        let controller = DashboardController::new(backend.clone());
        (backend, controller)
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_refreshes_immediately_then_every_interval() {
        let (backend, controller) = controller();
        let poller = Poller::start(controller.clone(), Duration::from_secs(5));

        sleep(Duration::from_millis(1)).await;
        assert_eq!(backend.list_requests(), 1);
        assert_eq!(controller.calls().len(), 1);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(backend.list_requests(), 2);

        sleep(Duration::from_secs(10)).await;
        assert_eq!(backend.list_requests(), 4);

        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_ticks() {
        let (backend, controller) = controller();
        let poller = Poller::start(controller, Duration::from_secs(5));
        sleep(Duration::from_millis(1)).await;
        assert!(poller.is_running());

        poller.shutdown().await;
        sleep(Duration::from_secs(60)).await;

        assert_eq!(backend.list_requests(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (backend, controller) = controller();
        let poller = Poller::start(controller, Duration::from_secs(5));
        sleep(Duration::from_millis(1)).await;

        drop(poller);
        sleep(Duration::from_secs(60)).await;

        assert_eq!(backend.list_requests(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_interrupts_slow_refresh() {
        let backend = Arc::new(MockCallBackend::new().with_delay(Duration::from_secs(30)));
        let controller = DashboardController::new(backend.clone());
        let poller = Poller::start(controller.clone(), Duration::from_secs(5));
        sleep(Duration::from_millis(1)).await;

        poller.shutdown().await;

        assert_eq!(backend.list_requests(), 1);
        assert!(controller.snapshot().last_refreshed.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_is_clamped() {
        let (backend, controller) = controller();
        let poller = Poller::start(controller, Duration::ZERO);

        sleep(Duration::from_millis(250)).await;
        assert_eq!(backend.list_requests(), 3);

        poller.shutdown().await;
    }
}
