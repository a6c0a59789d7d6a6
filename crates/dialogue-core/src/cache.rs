//! Process-wide model cache: load once, share everywhere.

use std::sync::Mutex;

use dialogue_types::Result;

use crate::model::ChatModel;

/// Lazily initialised, read-only-after-init holder for the [`ChatModel`].
///
/// The loader runs under the lock, so concurrent first calls still load
/// exactly once. A failed load leaves the cache empty.
pub struct ModelCache {
    slot: Mutex<Option<ChatModel>>,
}

impl ModelCache {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<ChatModel>
    where
        F: FnOnce() -> Result<ChatModel>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(model) = slot.as_ref() {
            return Ok(model.clone());
        }
        let model = load()?;
        *slot = Some(model.clone());
        Ok(model)
    }

    pub fn get(&self) -> Option<ChatModel> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}
