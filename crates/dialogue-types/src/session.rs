use crate::config::SamplingConfig;
use crate::message::Message;

/// Turn state machine: `Idle → Generating → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Generating { turn_id: u64 },
}

/// One window's conversation. Created empty, never persisted as a whole.
///
/// The message list only grows by appending, or gets replaced/cleared
/// wholesale; individual messages are never edited.
#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    pub sampling: SamplingConfig,
    turn: TurnState,
    turn_counter: u64,
}

impl Session {
    pub fn new(sampling: SamplingConfig) -> Self {
        Self {
            messages: Vec::new(),
            sampling,
            turn: TurnState::Idle,
            turn_counter: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn is_idle(&self) -> bool {
        self.turn == TurnState::Idle
    }

    /// Enter `Generating` and hand out the id of the new turn
    pub fn start_generating(&mut self) -> u64 {
        self.turn_counter += 1;
        self.turn = TurnState::Generating {
            turn_id: self.turn_counter,
        };
        self.turn_counter
    }

    /// Return to `Idle` if `turn_id` is the turn in flight.
    /// Returns false for stale or unknown ids.
    pub fn finish_generating(&mut self, turn_id: u64) -> bool {
        match self.turn {
            TurnState::Generating { turn_id: current } if current == turn_id => {
                self.turn = TurnState::Idle;
                true
            }
            _ => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SamplingConfig::default())
    }
}
