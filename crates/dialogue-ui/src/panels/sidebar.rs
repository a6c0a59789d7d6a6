//! Sidebar — sampling sliders and chat management buttons.

use egui::{self, RichText, Vec2};
use dialogue_types::config::SamplingConfig;
use dialogue_types::event::Notice;
use crate::theme::*;

/// What the caller should do after rendering the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    /// Nothing clicked (slider moves are applied in place)
    None,
    Save,
    Load,
    Clear,
}

/// Render the sidebar. Slider values are written straight into `sampling`;
/// the chat management buttons are disabled unless `idle`.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    sampling: &mut SamplingConfig,
    idle: bool,
    notice: Option<&Notice>,
) -> SidebarAction {
    let mut action = SidebarAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            // ── Settings ─────────────────────────────────────
            ui.heading(RichText::new("⚙ Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Temperature").color(TEXT_SECONDARY).small());
            if ui
                .add(
                    egui::Slider::new(&mut sampling.temperature, SamplingConfig::TEMPERATURE_RANGE)
                        .step_by(SamplingConfig::TEMPERATURE_STEP)
                        .fixed_decimals(1),
                )
                .changed()
            {
                log::debug!("temperature set to {:.1}", sampling.temperature);
            }

            ui.add_space(4.0);

            ui.label(RichText::new("Max Tokens").color(TEXT_SECONDARY).small());
            if ui
                .add(
                    egui::Slider::new(&mut sampling.max_tokens, SamplingConfig::MAX_TOKENS_RANGE)
                        .step_by(SamplingConfig::MAX_TOKENS_STEP),
                )
                .changed()
            {
                log::debug!("max tokens set to {}", sampling.max_tokens);
            }

            ui.add_space(16.0);

            // ── Chat Management ──────────────────────────────
            ui.heading(RichText::new("💾 Chat Management").color(TEXT_PRIMARY));
            ui.separator();

            if management_button(ui, "Save Chat", idle) {
                action = SidebarAction::Save;
            }
            if management_button(ui, "Load Chat", idle) {
                action = SidebarAction::Load;
            }
            if management_button(ui, "Clear Chat History", idle) {
                action = SidebarAction::Clear;
            }

            if let Some(notice) = notice {
                ui.add_space(8.0);
                let color = if notice.is_error() { ERROR } else { SUCCESS };
                ui.label(RichText::new(&notice.message).color(color));
            }
        });

    action
}

fn management_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> bool {
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), 28.0)),
    )
    .clicked()
}
