use tokio::sync::watch;
use tracing::info;

use crate::domain::{NavigationTarget, Navigator};

/// Navigator that publishes targets on a watch channel for the front end to
/// follow. Repeated identical targets still wake subscribers.
pub struct ChannelNavigator {
    tx: watch::Sender<Option<NavigationTarget>>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, watch::Receiver<Option<NavigationTarget>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, target: NavigationTarget) {
        info!(path = %target.path(), "navigating");
        self.tx.send_replace(Some(target));
    }
}
