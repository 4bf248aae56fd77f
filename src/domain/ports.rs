use async_trait::async_trait;

use crate::domain::contract::{ModeSelection, NicknameReceipt, QueueDetails};
use crate::domain::errors::LadderError;

/// Where a server verdict sends the user next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Home,
    MatchPage { match_id: String },
}

impl NavigationTarget {
    pub fn path(&self) -> String {
        match self {
            NavigationTarget::Home => "/".to_string(),
            NavigationTarget::MatchPage { match_id } => format!("/ladder/match/{match_id}"),
        }
    }
}

/// Outbound calls to the ladder service. Controllers depend on this trait,
/// not on the concrete HTTP client.
#[async_trait]
pub trait LadderGateway: Send + Sync {
    async fn select_nickname(&self, nickname: &str) -> Result<NicknameReceipt, LadderError>;
    async fn queue_details(&self) -> Result<QueueDetails, LadderError>;
    async fn change_queue(&self, open: bool) -> Result<QueueDetails, LadderError>;
    async fn queue_in_out(
        &self,
        joining: bool,
        modes: ModeSelection,
    ) -> Result<QueueDetails, LadderError>;
}

/// Navigation side effect. The front end decides what following a target
/// actually means.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: NavigationTarget);
}
