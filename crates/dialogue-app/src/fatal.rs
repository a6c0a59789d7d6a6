//! Shown instead of the chat when the model could not be loaded.

use egui::{CentralPanel, RichText};

use dialogue_types::ChatError;
use dialogue_ui::theme;

pub struct FatalApp {
    message: String,
    first_frame: bool,
}

impl FatalApp {
    pub fn new(error: &ChatError) -> Self {
        Self {
            message: error.to_string(),
            first_frame: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl eframe::App for FatalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("🤖 Chatbot").color(theme::TEXT_PRIMARY).strong());
            ui.separator();
            ui.label(RichText::new(&self.message).color(theme::ERROR));
            ui.add_space(8.0);
            ui.label(RichText::new("Close this window to exit.").color(theme::TEXT_SECONDARY));
        });
    }
}
