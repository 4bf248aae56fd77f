use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

use crate::domain::{
    GameMode, LadderError, LadderGateway, ModeSelection, NavigationTarget, Navigator, QueueDetails,
};

/// Everything the view needs to render the queue panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub details: QueueDetails,
    pub modes: ModeSelection,
    /// False while the latest request failed. The view keeps showing the
    /// last known server state in the meantime.
    pub reachable: bool,
}

impl PanelSnapshot {
    fn initial() -> Self {
        Self {
            details: QueueDetails::default(),
            modes: ModeSelection::default(),
            reachable: true,
        }
    }
}

// Server view plus request bookkeeping. Sequence numbers are issued before a
// request goes out and checked when its response lands, so responses that
// were overtaken in flight never overwrite newer state.
struct PanelState {
    details: QueueDetails,
    modes: ModeSelection,
    reachable: bool,
    issued_seq: u64,
    applied_seq: u64,
}

impl PanelState {
    fn new() -> Self {
        Self {
            details: QueueDetails::default(),
            modes: ModeSelection::default(),
            reachable: true,
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    fn begin_request(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    // Replace the server view unless a later response was already applied.
    fn apply(&mut self, seq: u64, details: QueueDetails) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.details = details;
        self.reachable = true;
        true
    }

    // A failed request keeps the displayed state. It only marks the panel
    // unhealthy when nothing newer has been applied since the request was
    // issued.
    fn fail(&mut self, seq: u64) {
        if seq > self.applied_seq {
            self.reachable = false;
        }
    }

    fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            details: self.details.clone(),
            modes: self.modes.clone(),
            reachable: self.reachable,
        }
    }
}

/// Owns the queue panel and drives it from server responses. The server is
/// the single source of truth for everything except the mode selection.
pub struct QueueController {
    gateway: Arc<dyn LadderGateway>,
    navigator: Arc<dyn Navigator>,
    panel: Mutex<PanelState>,
    view_tx: watch::Sender<PanelSnapshot>,
}

impl QueueController {
    pub fn new(gateway: Arc<dyn LadderGateway>, navigator: Arc<dyn Navigator>) -> Self {
        let (view_tx, _) = watch::channel(PanelSnapshot::initial());
        Self {
            gateway,
            navigator,
            panel: Mutex::new(PanelState::new()),
            view_tx,
        }
    }

    /// Subscribe to panel updates.
    pub fn subscribe(&self) -> watch::Receiver<PanelSnapshot> {
        self.view_tx.subscribe()
    }

    /// Current panel state for rendering.
    pub async fn snapshot(&self) -> PanelSnapshot {
        self.panel.lock().await.snapshot()
    }

    /// Flip one mode filter. Pure client-side state, sent along with the
    /// next join request.
    pub async fn set_mode(&self, mode: GameMode, enabled: bool) {
        let mut panel = self.panel.lock().await;
        panel.modes.set(mode, enabled);
        self.view_tx.send_replace(panel.snapshot());
    }

    /// Fetch the latest queue status and follow a match assignment if one
    /// arrived.
    #[tracing::instrument(name = "queue_refresh", skip_all)]
    pub async fn refresh(&self) {
        let seq = self.panel.lock().await.begin_request();
        let result = self.gateway.queue_details().await;
        self.finish(seq, result, true).await;
    }

    /// Ask the service to open or close the ladder. The server enforces the
    /// admin gate; this response replaces the panel but is not checked for a
    /// match assignment.
    #[tracing::instrument(name = "queue_change", skip_all, fields(open = open))]
    pub async fn set_queue_open(&self, open: bool) {
        let seq = self.panel.lock().await.begin_request();
        let result = self.gateway.change_queue(open).await;
        self.finish(seq, result, false).await;
    }

    /// Join or leave the queue, submitting the mode selection as currently
    /// held.
    #[tracing::instrument(name = "queue_in_out", skip_all, fields(joining = joining))]
    pub async fn set_membership(&self, joining: bool) {
        let (seq, modes) = {
            let mut panel = self.panel.lock().await;
            (panel.begin_request(), panel.modes.clone())
        };
        let result = self.gateway.queue_in_out(joining, modes).await;
        self.finish(seq, result, true).await;
    }

    // Settle one gateway outcome: replace the panel on success, discarding
    // responses a later request already overtook, keep the panel on failure,
    // then run the match redirect when the operation calls for it.
    async fn finish(
        &self,
        seq: u64,
        result: Result<QueueDetails, LadderError>,
        follow_game: bool,
    ) {
        let applied = match result {
            Ok(details) => {
                let mut panel = self.panel.lock().await;
                if panel.apply(seq, details.clone()) {
                    self.view_tx.send_replace(panel.snapshot());
                    Some(details)
                } else {
                    debug!(seq, "discarding stale queue response");
                    None
                }
            }
            Err(error) => {
                warn!(%error, "queue request failed; keeping last known state");
                let mut panel = self.panel.lock().await;
                panel.fail(seq);
                self.view_tx.send_replace(panel.snapshot());
                None
            }
        };

        if !follow_game {
            return;
        }
        if let Some(details) = applied {
            if let Some(match_id) = details.user.game {
                self.navigator
                    .navigate(NavigationTarget::MatchPage { match_id });
            }
        }
    }
}
