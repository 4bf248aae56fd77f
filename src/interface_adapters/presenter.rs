//! Plain-text rendering of the controller state.

use crate::domain::ModeSelection;
use crate::use_cases::nickname::NicknameState;
use crate::use_cases::queue_panel::PanelSnapshot;

/// One-line rendering of the queue panel.
pub fn queue_panel_line(snapshot: &PanelSnapshot) -> String {
    let details = &snapshot.details;
    let ladder = if details.is_open { "open" } else { "closed" };
    let membership = if details.user.in_queue {
        "in queue"
    } else {
        "not queued"
    };
    let mut line = format!(
        "ladder {ladder} | waiting: high {}, medium {}, low {} | {membership} | modes: {}",
        details.queues.high,
        details.queues.medium,
        details.queues.low,
        mode_labels(&snapshot.modes),
    );
    if !snapshot.reachable {
        line.push_str(" | last request failed, showing last known state");
    }
    line
}

fn mode_labels(modes: &ModeSelection) -> String {
    let enabled: Vec<&str> = [("ap", modes.ap), ("rd", modes.rd), ("cd", modes.cd)]
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(label, _)| label)
        .collect();
    if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(" ")
    }
}

/// Rejection feedback for the nickname form, if any.
pub fn nickname_feedback(state: &NicknameState) -> Option<String> {
    if state.message.is_empty() {
        None
    } else {
        Some(format!("nickname rejected: {}", state.message))
    }
}
