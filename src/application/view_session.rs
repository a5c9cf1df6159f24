// One dashboard activation bound to the lifetime of its view
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::FetchLifecycle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Fires the acquisition once on activation and publishes the lifecycle.
///
/// Deactivating or dropping the session cancels outstanding requests; a
/// result that arrives afterwards is discarded.
#[derive(Debug)]
pub struct ViewSession {
    state: watch::Receiver<FetchLifecycle>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ViewSession {
    pub fn activate(service: DashboardService) -> Self {
        let (tx, rx) = watch::channel(FetchLifecycle::Loading);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    tracing::debug!("View deactivated before acquisition settled");
                }
                lifecycle = service.load() => {
                    if token.is_cancelled() {
                        tracing::debug!("Discarding late result for deactivated view");
                        return;
                    }
                    tracing::info!(state = lifecycle.label(), "Dashboard settled");
                    tx.send_replace(lifecycle);
                }
            }
        });

        Self {
            state: rx,
            cancel,
            task,
        }
    }

    /// Current state without waiting.
    pub fn lifecycle(&self) -> FetchLifecycle {
        self.state.borrow().clone()
    }

    /// Wait for `Ready` or `Error`. `None` if the view was deactivated first.
    pub async fn settled(&mut self) -> Option<FetchLifecycle> {
        if self.cancel.is_cancelled() {
            return None;
        }
        match self.state.wait_for(|s| !s.is_loading()).await {
            Ok(state) => Some(state.clone()),
            Err(_) => None,
        }
    }

    pub fn deactivate(&self) {
        self.cancel.cancel();
    }
}

impl Drop for ViewSession {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}
