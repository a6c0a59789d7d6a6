//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(240, 242, 246);
pub const BG_SURFACE: Color32 = Color32::from_rgb(225, 228, 234);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(44, 62, 80);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(110, 118, 129);
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(255, 255, 255);
pub const ACCENT: Color32 = Color32::from_rgb(0, 122, 255);
pub const SUCCESS: Color32 = Color32::from_rgb(33, 150, 83);
pub const ERROR: Color32 = Color32::from_rgb(211, 47, 47);

pub const USER_BUBBLE: Color32 = Color32::from_rgb(26, 115, 232);
pub const BOT_BUBBLE: Color32 = Color32::from_rgb(239, 239, 239);

/// Bubbles are asymmetric: the corner nearest the speaker is sharp
pub const USER_BUBBLE_RADIUS: CornerRadius = CornerRadius {
    nw: 18,
    ne: 18,
    sw: 18,
    se: 2,
};
pub const BOT_BUBBLE_RADIUS: CornerRadius = CornerRadius {
    nw: 18,
    ne: 18,
    sw: 2,
    se: 18,
};
pub const BUBBLE_PADDING: Vec2 = Vec2::new(16.0, 12.0);
/// Fraction of the chat column a bubble may take
pub const BUBBLE_MAX_WIDTH: f32 = 0.7;
pub const BUBBLE_FONT_SIZE: f32 = 15.0;

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_PRIMARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_LIGHT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
