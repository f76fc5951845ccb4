//! Top bar with the page heading and table-wide controls.

use super::super::*;
use eframe::egui::{self, RichText};

impl VariantGridApp {
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context, actions: &mut Vec<TableAction>) {
        egui::TopBottomPanel::top("toolbar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new("Dynamic Table").color(COLOR_TEXT_PRIMARY));
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui
                        .add(toolbar_button("Add State", COLOR_ACCENT))
                        .on_hover_text("Append a new state row")
                        .clicked()
                    {
                        actions.push(TableAction::AddRow);
                    }
                    if ui
                        .add(toolbar_button("Add Variant", COLOR_SUCCESS))
                        .on_hover_text("Add a variant column to every state")
                        .clicked()
                    {
                        actions.push(TableAction::AddColumn);
                    }
                    if ui
                        .add(toolbar_button("Delete Variant", COLOR_DANGER))
                        .on_hover_text("Remove the last variant column from every state")
                        .clicked()
                    {
                        actions.push(TableAction::DeleteColumn);
                    }
                });
                ui.add_space(8.0);
            });
    }
}

fn toolbar_button(label: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label.to_owned()).color(egui::Color32::WHITE)).fill(fill)
}
