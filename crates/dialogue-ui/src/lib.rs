//! Dialogue UI — egui panels and the UI-side state they share.
//!
//! Panels are pure functions of the session plus transient widget state;
//! they never mutate the conversation themselves. Actions go back to the
//! caller as return values.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
