use serde::{Deserialize, Serialize};

// Request payload for claiming a nickname.
#[derive(Debug, Clone, Serialize)]
pub struct NicknameRequest {
    pub nickname: String,
}

/// Verdict carried by the nickname selection response. The service answers
/// `"ok"` when the nickname is accepted; any other value is a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectStatus {
    Ok,
    #[serde(other)]
    Rejected,
}

// Response payload of the nickname selection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NicknameReceipt {
    pub status: SelectStatus,
    pub message: Option<String>,
}

/// Game mode filters submitted when joining the queue. These live on the
/// client only; the server never echoes them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeSelection {
    pub ap: bool,
    pub rd: bool,
    pub cd: bool,
}

impl Default for ModeSelection {
    fn default() -> Self {
        Self {
            ap: true,
            rd: true,
            cd: true,
        }
    }
}

impl ModeSelection {
    pub fn set(&mut self, mode: GameMode, enabled: bool) {
        match mode {
            GameMode::AllPick => self.ap = enabled,
            GameMode::RandomDraft => self.rd = enabled,
            GameMode::CaptainsDraft => self.cd = enabled,
        }
    }

    pub fn is_enabled(&self, mode: GameMode) -> bool {
        match mode {
            GameMode::AllPick => self.ap,
            GameMode::RandomDraft => self.rd,
            GameMode::CaptainsDraft => self.cd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    AllPick,
    RandomDraft,
    CaptainsDraft,
}

// Queue standing of the current user as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserQueueStatus {
    pub in_queue: bool,
    /// Identifier of the match the user was placed into, if any.
    pub game: Option<String>,
}

// Waiting-player counts per skill bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct QueueCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// Full panel payload returned by every queue endpoint. The client replaces
/// its view with this wholesale; it never edits individual fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueueDetails {
    pub is_open: bool,
    pub user: UserQueueStatus,
    pub queues: QueueCounts,
}

// Request payload for joining or leaving the queue.
#[derive(Debug, Clone, Serialize)]
pub struct InOutRequest {
    #[serde(rename = "in")]
    pub joining: bool,
    pub modes: ModeSelection,
}
