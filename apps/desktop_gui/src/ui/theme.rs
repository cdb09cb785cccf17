use eframe::egui;

pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 20, 60);
pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(10, 127, 42);
pub const PRIMARY_BUTTON: egui::Color32 = egui::Color32::from_rgb(25, 118, 210);
pub const SECONDARY_BUTTON: egui::Color32 = egui::Color32::from_rgb(238, 238, 238);
pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const SUMMARY_FILL: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
pub const SUMMARY_STROKE: egui::Color32 = egui::Color32::from_rgb(238, 238, 238);

pub const MAX_CONTENT_WIDTH: f32 = 720.0;
pub const INPUT_HEIGHT: f32 = 30.0;

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
    });
}
