use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::info;

use crate::use_cases::queue_panel::QueueController;

/// Periodic queue refresh, scoped to the life of this handle. Dropping the
/// handle cancels the loop; [`QueuePoller::shutdown`] stops it cleanly.
pub struct QueuePoller {
    shutdown: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl QueuePoller {
    /// Spawn the refresh loop. The first refresh fires immediately, then one
    /// per period.
    pub fn spawn(controller: Arc<QueueController>, period: Duration) -> Self {
        let shutdown = Arc::new(Notify::new());
        let task = tokio::spawn(refresh_loop(controller, period, shutdown.clone()));
        Self {
            shutdown,
            task: Some(task),
        }
    }

    /// Stop the loop and wait for it to finish.
    pub async fn shutdown(mut self) {
        self.shutdown.notify_one();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for QueuePoller {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

#[tracing::instrument(name = "queue_poller", skip_all)]
async fn refresh_loop(controller: Arc<QueueController>, period: Duration, shutdown: Arc<Notify>) {
    let mut interval = tokio::time::interval(period);
    info!(period_ms = period.as_millis() as u64, "queue poller started");
    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!("queue poller stopped");
                break;
            }
            _ = interval.tick() => {
                controller.refresh().await;
            }
        }
    }
}
