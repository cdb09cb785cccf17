use client_core::{Clock, FormController, SystemClock};
use eframe::egui;
use shared::AddressField;
use storage::{AddressPersistence, AddressStore, FileStore};

use crate::controller::{events::UiAction, orchestration::apply_actions};
use crate::ui::{theme, widgets};

pub struct ShippingFormApp<P = AddressStore<FileStore>, C = SystemClock> {
    form: FormController<P, C>,
}

impl<P: AddressPersistence, C: Clock> ShippingFormApp<P, C> {
    pub fn new(form: FormController<P, C>) -> Self {
        Self { form }
    }

    fn show_form_card(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        egui::Frame::NONE
            .fill(theme::CARD_FILL)
            .corner_radius(8.0)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                self.field(ui, AddressField::FullName, actions);
                self.field(ui, AddressField::Phone, actions);
                self.field(ui, AddressField::Street, actions);

                // City and state share a row.
                ui.columns(2, |cols| {
                    self.field(&mut cols[0], AddressField::City, actions);
                    self.field(&mut cols[1], AddressField::State, actions);
                });

                self.field(ui, AddressField::Pincode, actions);

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let save = egui::Button::new(
                        egui::RichText::new("Save Address").color(egui::Color32::WHITE),
                    )
                    .fill(theme::PRIMARY_BUTTON);
                    if ui.add(save).clicked() {
                        actions.push(UiAction::Submit);
                    }
                    let clear = egui::Button::new("Clear").fill(theme::SECONDARY_BUTTON);
                    if ui.add(clear).clicked() {
                        actions.push(UiAction::Clear);
                    }
                });

                if let Some(status) = self.form.status() {
                    widgets::status_line(ui, status);
                }
            });
    }

    fn field(&self, ui: &mut egui::Ui, field: AddressField, actions: &mut Vec<UiAction>) {
        let response = widgets::labeled_input(
            ui,
            field,
            self.form.record().get(field),
            self.form.error(field),
        );
        if let Some(value) = response.edited {
            actions.push(UiAction::Edit { field, value });
        }
        if response.submitted {
            actions.push(UiAction::Submit);
        }
    }
}

impl<P: AddressPersistence, C: Clock> eframe::App for ShippingFormApp<P, C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.form.poll_status();

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(theme::MAX_CONTENT_WIDTH);
                ui.heading("Shipping Address Form");
                ui.add_space(8.0);

                self.show_form_card(ui, &mut actions);

                ui.add_space(20.0);
                widgets::summary_panel(ui, self.form.summary().as_ref());
            });
        });

        if !actions.is_empty() {
            apply_actions(&mut self.form, actions);
            ctx.request_repaint();
        }

        if let Some(remaining) = self.form.status_expires_in() {
            ctx.request_repaint_after(remaining);
        }
    }
}
