use client_core::{
    summary::{EMPTY_SUMMARY, SUMMARY_TITLE},
    AddressSummary, StatusMessage,
};
use eframe::egui;
use shared::AddressField;

use crate::ui::theme;

pub struct FieldResponse {
    /// New raw text when the user changed the input this frame.
    pub edited: Option<String>,
    /// Enter was pressed while the input had focus.
    pub submitted: bool,
}

/// Label row with inline error, followed by a full-width single-line input.
pub fn labeled_input(
    ui: &mut egui::Ui,
    field: AddressField,
    value: &str,
    error: Option<&str>,
) -> FieldResponse {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(field.label()).strong());
        if let Some(error) = error {
            ui.label(egui::RichText::new(format!("- {error}")).color(theme::ERROR_TEXT));
        }
    });

    let mut buf = value.to_string();
    let mut edit = egui::TextEdit::singleline(&mut buf)
        .id_salt(field.key())
        .hint_text(
            egui::RichText::new(field.hint())
                .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);
    if let Some(limit) = field.digit_count() {
        edit = edit.char_limit(limit);
    }
    let response = ui.add_sized([ui.available_width(), theme::INPUT_HEIGHT], edit);
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    ui.add_space(4.0);

    FieldResponse {
        edited: response.changed().then_some(buf),
        submitted,
    }
}

pub fn status_line(ui: &mut egui::Ui, status: &StatusMessage) {
    let color = if status.kind().is_failure() {
        theme::ERROR_TEXT
    } else {
        theme::SUCCESS_TEXT
    };
    ui.add_space(6.0);
    ui.label(egui::RichText::new(status.text()).color(color));
}

pub fn summary_panel(ui: &mut egui::Ui, summary: Option<&AddressSummary>) {
    egui::Frame::NONE
        .fill(theme::SUMMARY_FILL)
        .stroke(egui::Stroke::new(1.0, theme::SUMMARY_STROKE))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(SUMMARY_TITLE).strong().size(17.0));
            ui.add_space(4.0);
            match summary {
                Some(summary) => {
                    ui.label(egui::RichText::new(&summary.name).strong());
                    ui.label(&summary.phone);
                    ui.label(&summary.street);
                    ui.label(&summary.locality);
                }
                None => {
                    ui.weak(EMPTY_SUMMARY);
                }
            }
        });
}
