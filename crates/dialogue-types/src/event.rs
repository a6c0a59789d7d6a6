use serde::{Deserialize, Serialize};

/// Events published by the turn controller.
/// The UI drains these each frame and applies them to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A user message was appended and generation started
    TurnStart { turn_id: u64 },

    /// The generator produced a decoded reply
    ReplyReady {
        turn_id: u64,
        text: String,
        /// Number of new tokens the generator emitted
        tokens: usize,
    },

    /// Generation failed; the user message stays without a reply
    TurnFailed { turn_id: u64, message: String },
}

impl ChatEvent {
    pub fn turn_id(&self) -> u64 {
        match self {
            ChatEvent::TurnStart { turn_id }
            | ChatEvent::ReplyReady { turn_id, .. }
            | ChatEvent::TurnFailed { turn_id, .. } => *turn_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Feedback shown under the chat management buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
