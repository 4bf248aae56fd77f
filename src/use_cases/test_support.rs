//! Shared fakes for the use case unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    LadderError, LadderGateway, ModeSelection, NavigationTarget, Navigator, NicknameReceipt,
    QueueCounts, QueueDetails, UserQueueStatus,
};

/// Scripted gateway: tests queue up per-endpoint results up front and inspect
/// the requests the controllers issued afterwards. Queue endpoints fall back
/// to a default payload when their script runs dry, which keeps poller tests
/// from having to script every tick.
pub(crate) struct ScriptedGateway {
    nickname_script: Mutex<VecDeque<Result<NicknameReceipt, LadderError>>>,
    details_script: Mutex<VecDeque<Result<QueueDetails, LadderError>>>,
    change_script: Mutex<VecDeque<Result<QueueDetails, LadderError>>>,
    in_out_script: Mutex<VecDeque<Result<QueueDetails, LadderError>>>,
    nickname_requests: Mutex<Vec<String>>,
    change_requests: Mutex<Vec<bool>>,
    in_out_requests: Mutex<Vec<(bool, ModeSelection)>>,
    details_requests: Mutex<usize>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            nickname_script: Mutex::new(VecDeque::new()),
            details_script: Mutex::new(VecDeque::new()),
            change_script: Mutex::new(VecDeque::new()),
            in_out_script: Mutex::new(VecDeque::new()),
            nickname_requests: Mutex::new(Vec::new()),
            change_requests: Mutex::new(Vec::new()),
            in_out_requests: Mutex::new(Vec::new()),
            details_requests: Mutex::new(0),
        }
    }

    pub(crate) fn push_nickname(&self, result: Result<NicknameReceipt, LadderError>) {
        self.nickname_script
            .lock()
            .expect("nickname script mutex poisoned")
            .push_back(result);
    }

    pub(crate) fn push_details(&self, result: Result<QueueDetails, LadderError>) {
        self.details_script
            .lock()
            .expect("details script mutex poisoned")
            .push_back(result);
    }

    pub(crate) fn push_change(&self, result: Result<QueueDetails, LadderError>) {
        self.change_script
            .lock()
            .expect("change script mutex poisoned")
            .push_back(result);
    }

    pub(crate) fn push_in_out(&self, result: Result<QueueDetails, LadderError>) {
        self.in_out_script
            .lock()
            .expect("in_out script mutex poisoned")
            .push_back(result);
    }

    pub(crate) fn submitted_nicknames(&self) -> Vec<String> {
        self.nickname_requests
            .lock()
            .expect("nickname requests mutex poisoned")
            .clone()
    }

    pub(crate) fn change_requests(&self) -> Vec<bool> {
        self.change_requests
            .lock()
            .expect("change requests mutex poisoned")
            .clone()
    }

    pub(crate) fn in_out_requests(&self) -> Vec<(bool, ModeSelection)> {
        self.in_out_requests
            .lock()
            .expect("in_out requests mutex poisoned")
            .clone()
    }

    pub(crate) fn details_calls(&self) -> usize {
        *self
            .details_requests
            .lock()
            .expect("details requests mutex poisoned")
    }
}

#[async_trait]
impl LadderGateway for ScriptedGateway {
    async fn select_nickname(&self, nickname: &str) -> Result<NicknameReceipt, LadderError> {
        self.nickname_requests
            .lock()
            .expect("nickname requests mutex poisoned")
            .push(nickname.to_string());
        self.nickname_script
            .lock()
            .expect("nickname script mutex poisoned")
            .pop_front()
            .expect("no scripted nickname response")
    }

    async fn queue_details(&self) -> Result<QueueDetails, LadderError> {
        *self
            .details_requests
            .lock()
            .expect("details requests mutex poisoned") += 1;
        self.details_script
            .lock()
            .expect("details script mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(QueueDetails::default()))
    }

    async fn change_queue(&self, open: bool) -> Result<QueueDetails, LadderError> {
        self.change_requests
            .lock()
            .expect("change requests mutex poisoned")
            .push(open);
        self.change_script
            .lock()
            .expect("change script mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(QueueDetails::default()))
    }

    async fn queue_in_out(
        &self,
        joining: bool,
        modes: ModeSelection,
    ) -> Result<QueueDetails, LadderError> {
        self.in_out_requests
            .lock()
            .expect("in_out requests mutex poisoned")
            .push((joining, modes));
        self.in_out_script
            .lock()
            .expect("in_out script mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(QueueDetails::default()))
    }
}

/// Navigator that records every target it was handed.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    targets: Mutex<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub(crate) fn recorded(&self) -> Vec<NavigationTarget> {
        self.targets.lock().expect("targets mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        self.targets
            .lock()
            .expect("targets mutex poisoned")
            .push(target);
    }
}

pub(crate) fn open_details() -> QueueDetails {
    QueueDetails {
        is_open: true,
        user: UserQueueStatus::default(),
        queues: QueueCounts {
            high: 1,
            medium: 2,
            low: 0,
        },
    }
}

pub(crate) fn details_with_game(match_id: &str) -> QueueDetails {
    QueueDetails {
        user: UserQueueStatus {
            in_queue: false,
            game: Some(match_id.to_string()),
        },
        ..open_details()
    }
}
