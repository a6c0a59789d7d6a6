use egui::RichText;

use crate::theme::*;

pub const TITLE: &str = "🤖 Chatbot";
pub const SUBTITLE: &str = "Welcome to The Dialogue Engine! Chat with your custom BlenderBot model.";

pub fn header(ui: &mut egui::Ui) {
    ui.heading(RichText::new(TITLE).color(TEXT_PRIMARY).strong().size(28.0));
    ui.label(RichText::new(SUBTITLE).color(TEXT_SECONDARY));
    ui.add_space(4.0);
}
