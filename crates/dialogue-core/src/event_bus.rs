//! Simple event bus for decoupled communication between the generation
//! worker and the UI.
//!
//! Workers push from their own thread; the UI drains on each frame.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use dialogue_types::event::ChatEvent;

/// Shared event bus — clone-cheap via Arc.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<ChatEvent>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Publish an event. Called by the turn controller and its workers.
    pub fn emit(&self, event: ChatEvent) {
        self.queue().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.queue().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
