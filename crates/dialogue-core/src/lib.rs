//! Dialogue core — everything between the UI and the model adapters.
//!
//! The core never imports platform code; it talks to the tokenizer,
//! generator and chat file through the traits in [`ports`].

pub mod ports;
pub mod model;
pub mod cache;
pub mod turn;
pub mod archive;
pub mod event_bus;


pub use model::{ChatModel, Reply};
pub use turn::{PendingTurn, TurnController, TurnOutcome};
pub use archive::ChatArchive;
