//! Save / Load / Clear for the session's message list.
//!
//! Every operation reports its outcome as a [`Notice`] for the sidebar and
//! refuses to run while a reply is being generated.

use dialogue_types::{event::Notice, session::Session, ChatError, Result};

use crate::ports::ChatStorePort;

pub struct ChatArchive {
    store: Box<dyn ChatStorePort>,
}

impl ChatArchive {
    pub fn new(store: Box<dyn ChatStorePort>) -> Self {
        Self { store }
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Overwrite the saved chat with the whole current list
    pub fn save(&self, session: &Session) -> Notice {
        match self.try_save(session) {
            Ok(()) => {
                log::info!(
                    "Saved {} messages to {} ({})",
                    session.messages().len(),
                    self.store.location(),
                    self.store.backend_name()
                );
                Notice::success(format!("Chat saved as {}", self.store.location()))
            }
            Err(e) => {
                log::error!("Save failed: {}", e);
                Notice::error(e.to_string())
            }
        }
    }

    /// Replace the current list with the saved one, if there is one
    pub fn load(&self, session: &mut Session) -> Notice {
        match self.try_load(session) {
            Ok(true) => {
                log::info!(
                    "Loaded {} messages from {}",
                    session.messages().len(),
                    self.store.location()
                );
                Notice::success("Chat loaded!")
            }
            Ok(false) => {
                log::warn!("No saved chat at {}", self.store.location());
                Notice::error("No saved chat found!")
            }
            Err(e) => {
                log::error!("Load failed: {}", e);
                Notice::error(e.to_string())
            }
        }
    }

    /// Drop every message. No confirmation step.
    pub fn clear(&self, session: &mut Session) -> Notice {
        if !session.is_idle() {
            return Notice::error(ChatError::Busy.to_string());
        }
        session.clear_messages();
        log::info!("Chat history cleared");
        Notice::success("Chat cleared!")
    }

    pub fn try_save(&self, session: &Session) -> Result<()> {
        if !session.is_idle() {
            return Err(ChatError::Busy);
        }
        self.store.save(session.messages())
    }

    /// `Ok(false)` when nothing was saved; the session is left untouched
    /// unless the whole file was read successfully.
    pub fn try_load(&self, session: &mut Session) -> Result<bool> {
        if !session.is_idle() {
            return Err(ChatError::Busy);
        }
        match self.store.load()? {
            Some(messages) => {
                session.replace_messages(messages);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
