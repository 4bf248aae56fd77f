use std::fmt;

/// Errors surfaced by the ladder gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// The request never produced a response.
    Transport(String),
    /// The service answered with a non-success status.
    Upstream { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderError::Transport(err) => write!(f, "ladder transport error: {err}"),
            LadderError::Upstream { status, message } => match message {
                Some(message) => write!(f, "ladder upstream error {status}: {message}"),
                None => write!(f, "ladder upstream error {status}"),
            },
            LadderError::Decode(err) => write!(f, "ladder response decode error: {err}"),
        }
    }
}

impl std::error::Error for LadderError {}
