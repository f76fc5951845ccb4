//! Bottom status bar with table dimensions and the latest action.

use super::super::*;
use eframe::egui;

impl VariantGridApp {
    /// Renders the bottom status bar with row/column counts and status text.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} states × {} variants",
                            self.editor.len(),
                            self.editor.column_count()
                        ))
                        .small()
                        .color(COLOR_TEXT_SECONDARY),
                    );
                    if let Some(status) = &self.status {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(&status.text)
                                .small()
                                .color(egui::Color32::YELLOW),
                        );
                    }
                    if let Some(gesture) = self.drag {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!(
                                "Dragging state {} (row {})",
                                gesture.row_id(),
                                gesture.tracked_index() + 1
                            ))
                            .small()
                            .color(COLOR_TEXT_MUTED),
                        );
                    }
                });
            });
    }
}
