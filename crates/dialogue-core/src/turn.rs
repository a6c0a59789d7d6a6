//! Turn controller — one user message in, one bot message out.
//!
//! A turn runs in order:
//! 1. Append the user message (`begin_turn`)
//! 2. Encode the latest user text and generate, bounded by `max_tokens`
//! 3. Decode, skipping special tokens, and trim whitespace
//! 4. Append the bot message (`complete_turn`)
//! 5. Ask the UI to repaint
//!
//! `run_turn` does all of it on the calling thread. The UI uses
//! `dispatch` + `apply_events` so steps 2-3 happen on a worker thread.

use std::thread::{self, JoinHandle};

use dialogue_types::{
    config::SamplingConfig,
    event::ChatEvent,
    message::Message,
    session::Session,
    ChatError, Result,
};
use crate::event_bus::EventBus;
use crate::model::{ChatModel, Reply};

/// A turn whose user message is appended and whose reply is outstanding
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
    pub turn_id: u64,
    pub prompt: String,
    /// Slider values captured at submit time
    pub sampling: SamplingConfig,
}

/// What applying a drained event did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Started { turn_id: u64 },
    Replied { turn_id: u64 },
    Failed { turn_id: u64, message: String },
    /// Event for a turn that is no longer in flight
    Stale { turn_id: u64 },
}

pub struct TurnController {
    model: ChatModel,
    event_bus: EventBus,
}

impl TurnController {
    pub fn new(model: ChatModel, event_bus: EventBus) -> Self {
        Self { model, event_bus }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn model(&self) -> &ChatModel {
        &self.model
    }

    /// Step 1. Returns `Ok(None)` for empty input, which changes nothing.
    pub fn begin_turn(&self, session: &mut Session, input: &str) -> Result<Option<PendingTurn>> {
        if input.is_empty() {
            return Ok(None);
        }
        if !session.is_idle() {
            return Err(ChatError::Busy);
        }

        session.append(Message::user(input));
        let turn_id = session.start_generating();
        self.event_bus.emit(ChatEvent::TurnStart { turn_id });
        log::info!("Turn {} started ({} chars)", turn_id, input.chars().count());

        Ok(Some(PendingTurn {
            turn_id,
            prompt: input.to_string(),
            sampling: session.sampling.clamped(),
        }))
    }

    /// Steps 2-3. Safe to call from any thread.
    pub fn generate(&self, pending: &PendingTurn) -> Result<Reply> {
        self.model.reply(&pending.prompt, &pending.sampling)
    }

    /// Step 4. Ignored unless `turn_id` is the turn in flight.
    pub fn complete_turn(&self, session: &mut Session, turn_id: u64, text: &str) -> bool {
        if !session.finish_generating(turn_id) {
            log::warn!("Dropping reply for stale turn {}", turn_id);
            return false;
        }
        session.append(Message::bot(text));
        true
    }

    /// Leave the user message without a reply and go back to idle
    pub fn fail_turn(&self, session: &mut Session, turn_id: u64, message: &str) -> bool {
        if !session.finish_generating(turn_id) {
            return false;
        }
        log::error!("Turn {} failed: {}", turn_id, message);
        true
    }

    /// Run a whole turn synchronously. Returns `Ok(false)` for empty input.
    pub fn run_turn(&self, session: &mut Session, input: &str) -> Result<bool> {
        let pending = match self.begin_turn(session, input)? {
            Some(p) => p,
            None => return Ok(false),
        };

        match self.generate(&pending) {
            Ok(reply) => {
                log::info!("Turn {} finished ({} tokens)", pending.turn_id, reply.tokens);
                self.complete_turn(session, pending.turn_id, &reply.text);
                Ok(true)
            }
            Err(e) => {
                self.fail_turn(session, pending.turn_id, &e.to_string());
                Err(e)
            }
        }
    }

    /// Run steps 2-3 on a worker thread and publish the result on the bus.
    /// `on_done` fires after the event is published (step 5).
    pub fn dispatch<F>(&self, pending: PendingTurn, on_done: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let model = self.model.clone();
        let bus = self.event_bus.clone();

        thread::spawn(move || {
            let event = match model.reply(&pending.prompt, &pending.sampling) {
                Ok(reply) => {
                    log::info!("Turn {} finished ({} tokens)", pending.turn_id, reply.tokens);
                    ChatEvent::ReplyReady {
                        turn_id: pending.turn_id,
                        text: reply.text,
                        tokens: reply.tokens,
                    }
                }
                Err(e) => ChatEvent::TurnFailed {
                    turn_id: pending.turn_id,
                    message: e.to_string(),
                },
            };
            bus.emit(event);
            on_done();
        })
    }

    /// Drain the bus and apply every event to `session` (step 4)
    pub fn apply_events(&self, session: &mut Session) -> Vec<TurnOutcome> {
        self.event_bus
            .drain()
            .into_iter()
            .map(|event| self.apply_event(session, event))
            .collect()
    }

    fn apply_event(&self, session: &mut Session, event: ChatEvent) -> TurnOutcome {
        match event {
            ChatEvent::TurnStart { turn_id } => TurnOutcome::Started { turn_id },
            ChatEvent::ReplyReady { turn_id, text, .. } => {
                if self.complete_turn(session, turn_id, &text) {
                    TurnOutcome::Replied { turn_id }
                } else {
                    TurnOutcome::Stale { turn_id }
                }
            }
            ChatEvent::TurnFailed { turn_id, message } => {
                if self.fail_turn(session, turn_id, &message) {
                    TurnOutcome::Failed { turn_id, message }
                } else {
                    TurnOutcome::Stale { turn_id }
                }
            }
        }
    }
}
