use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::{LadderGateway, NavigationTarget, Navigator, SelectStatus};

/// Nickname form state: the last submitted value and the last rejection
/// message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NicknameState {
    pub nickname: String,
    pub message: String,
}

/// Drives the nickname selection flow. An accepted nickname navigates home;
/// a rejected one keeps the user on the form with the server's message.
pub struct NicknameController {
    gateway: Arc<dyn LadderGateway>,
    navigator: Arc<dyn Navigator>,
    form: Mutex<NicknameState>,
}

impl NicknameController {
    pub fn new(gateway: Arc<dyn LadderGateway>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            gateway,
            navigator,
            form: Mutex::new(NicknameState::default()),
        }
    }

    /// Current form state for rendering.
    pub async fn state(&self) -> NicknameState {
        self.form.lock().await.clone()
    }

    /// Submit a nickname for validation. The displayed message is only ever
    /// rewritten by a rejection verdict.
    #[tracing::instrument(name = "nickname_select", skip_all, fields(nickname = %nickname))]
    pub async fn submit(&self, nickname: &str) {
        self.form.lock().await.nickname = nickname.to_string();

        match self.gateway.select_nickname(nickname).await {
            Ok(receipt) => match receipt.status {
                SelectStatus::Ok => self.navigator.navigate(NavigationTarget::Home),
                SelectStatus::Rejected => {
                    self.form.lock().await.message = receipt.message.unwrap_or_default();
                }
            },
            Err(error) => {
                // Transport trouble never touches the displayed state.
                warn!(%error, "nickname submission failed");
            }
        }
    }
}
