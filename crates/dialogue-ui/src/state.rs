//! UI-level state that drives rendering.
//! The conversation itself lives in the `Session`; this only holds what the
//! widgets need between frames, updated from each frame's turn outcomes.

use dialogue_core::TurnOutcome;
use dialogue_types::event::Notice;

pub const STATUS_READY: &str = "Ready";
pub const STATUS_GENERATING: &str = "Generating response...";
pub const STATUS_FAILED: &str = "Last response failed";

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Latest chat management or generation notice
    pub notice: Option<Notice>,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            notice: None,
            status_text: STATUS_READY.to_string(),
        }
    }

    /// Fold the outcomes of one `apply_events` pass into the widgets' state
    pub fn process_outcomes(&mut self, outcomes: Vec<TurnOutcome>) {
        for outcome in outcomes {
            match outcome {
                TurnOutcome::Started { .. } => {
                    self.status_text = STATUS_GENERATING.to_string();
                }
                TurnOutcome::Replied { .. } => {
                    self.status_text = STATUS_READY.to_string();
                }
                TurnOutcome::Failed { message, .. } => {
                    self.status_text = STATUS_FAILED.to_string();
                    self.notice = Some(Notice::error(message));
                }
                TurnOutcome::Stale { turn_id } => {
                    log::debug!("ignoring outcome for stale turn {}", turn_id);
                }
            }
        }
    }

    /// Whether the status line reports a failed turn
    pub fn status_is_error(&self) -> bool {
        self.status_text == STATUS_FAILED
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Take the input box content for submission, clearing the box.
    ///
    /// Empty input yields `None`. Anything else, whitespace included, is
    /// submitted exactly as typed.
    pub fn take_submission(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.input_text);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
