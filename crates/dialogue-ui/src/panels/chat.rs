//! Chat panel — message bubbles, generation spinner and the input form.

use egui::{self, text::LayoutJob, Align, FontSelection, Layout, RichText, ScrollArea, Vec2};
use dialogue_types::message::{Message, Role};
use dialogue_types::session::Session;
use crate::state::UiState;
use crate::theme::*;

pub const INPUT_HINT: &str = "Type your message...";
pub const SPINNER_TEXT: &str = "🤖 Generating response...";

/// Render the chat panel. Returns Some(text) when the user submits non-empty input.
pub fn chat_panel(ui: &mut egui::Ui, session: &Session, state: &mut UiState) -> Option<String> {
    let mut submitted = None;
    let idle = session.is_idle();

    ui.vertical(|ui| {
        // Messages area
        let available_height = ui.available_height() - 80.0;
        ScrollArea::vertical()
            .max_height(available_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in session.messages() {
                    render_message(ui, message);
                    ui.add_space(6.0);
                }

                if !idle {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new(SPINNER_TEXT).color(TEXT_SECONDARY));
                    });
                }
            });

        ui.separator();

        // Input form
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(&mut state.input_text)
                .hint_text(INPUT_HINT)
                .desired_width(ui.available_width() - 70.0)
                .font(egui::FontId::proportional(14.0));

            let response = ui.add(input);

            let send_btn = ui.add_enabled(
                idle,
                egui::Button::new(RichText::new("Send").color(TEXT_LIGHT))
                    .fill(if idle { ACCENT } else { BG_SURFACE })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(60.0, 0.0)),
            );

            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if idle && (enter || send_btn.clicked()) {
                submitted = state.take_submission();
                response.request_focus();
            }
        });

        let status_color = if state.status_is_error() { ERROR } else { TEXT_SECONDARY };
        ui.label(RichText::new(&state.status_text).color(status_color).small());
    });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (fill, text_color, radius, layout) = match message.role {
        Role::User => (
            USER_BUBBLE,
            TEXT_LIGHT,
            USER_BUBBLE_RADIUS,
            Layout::right_to_left(Align::TOP),
        ),
        Role::Bot => (
            BOT_BUBBLE,
            TEXT_PRIMARY,
            BOT_BUBBLE_RADIUS,
            Layout::left_to_right(Align::TOP),
        ),
    };
    let max_width = ui.available_width() * BUBBLE_MAX_WIDTH;

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(radius)
            .inner_margin(BUBBLE_PADDING)
            .show(ui, |ui| {
                ui.set_max_width(max_width);

                let style = ui.style().clone();
                let mut job = LayoutJob::default();
                RichText::new(format!("{} ", message.role.label()))
                    .strong()
                    .size(BUBBLE_FONT_SIZE)
                    .color(text_color)
                    .append_to(&mut job, &style, FontSelection::Default, Align::Center);
                RichText::new(&message.text)
                    .size(BUBBLE_FONT_SIZE)
                    .color(text_color)
                    .append_to(&mut job, &style, FontSelection::Default, Align::Center);

                ui.add(egui::Label::new(job).wrap());
            });
    });
}
