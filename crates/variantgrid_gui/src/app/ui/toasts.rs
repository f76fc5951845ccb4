//! Toast stack: one card per recent change, tagged with what it touched.

use super::super::*;
use eframe::egui::{self, RichText};

/// Badge text and color naming what a report changed.
fn toast_badge(feedback: &Feedback) -> (&'static str, egui::Color32) {
    match feedback {
        Feedback::NoColumnsLeft => ("VARIANT", COLOR_TEXT_MUTED),
        feedback if feedback.is_row_change() => ("STATE", COLOR_ACCENT),
        _ => ("VARIANT", COLOR_SUCCESS),
    }
}

impl VariantGridApp {
    /// Renders the toast stack in the top-right corner, newest first.
    pub(crate) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("change_toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 72.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in self.toasts.iter().rev() {
                    let (badge, color) = toast_badge(&toast.feedback);
                    egui::Frame::popup(ui.style())
                        .fill(COLOR_BG_TERTIARY)
                        .stroke(egui::Stroke::new(1.0, color))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(badge).small().strong().color(color));
                                ui.label(RichText::new(toast.feedback.message()).small());
                                if toast.repeats > 1 {
                                    ui.label(
                                        RichText::new(format!("×{}", toast.repeats))
                                            .small()
                                            .color(COLOR_TEXT_MUTED),
                                    );
                                }
                            });
                        });
                }
            });
    }
}
