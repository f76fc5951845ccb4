//! Central grid: positional header plus one row view per state.

use super::super::*;
use super::row_view::{render_row_view, RowViewProps};
use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

impl VariantGridApp {
    pub(crate) fn render_table_panel(
        &mut self,
        ctx: &egui::Context,
        actions: &mut Vec<TableAction>,
    ) {
        let headers = self.editor.column_headers();
        let column_count = headers.len();
        let drag = self.drag;
        let overlay = drag_overlay_color(self.config.drag_opacity);
        let mut row_rects = Vec::with_capacity(self.editor.len());

        egui::CentralPanel::default().show(ctx, |ui| {
            TableBuilder::new(ui)
                // Column count is part of the id so stored widths reset when it changes.
                .id_salt(("variant_table", column_count))
                .striped(true)
                .resizable(false)
                .sense(egui::Sense::click_and_drag())
                .column(Column::auto().at_least(200.0))
                .columns(Column::auto().at_least(110.0), column_count)
                .header(HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.strong("State");
                    });
                    for label in &headers {
                        header.col(|ui| {
                            ui.strong(label);
                        });
                    }
                })
                .body(|mut body| {
                    for (index, row) in self.editor.rows().iter().enumerate() {
                        body.row(ROW_HEIGHT, |mut table_row| {
                            let rect = render_row_view(
                                &mut table_row,
                                RowViewProps {
                                    index,
                                    row,
                                    column_count,
                                    drag,
                                },
                                actions,
                            );
                            row_rects.push(rect);
                        });
                    }
                });

            // Painted after the body so stripes, cells and the button all dim together.
            let dragged_rect = drag
                .and_then(|gesture| self.editor.index_of(gesture.row_id()))
                .and_then(|index| row_rects.get(index).copied())
                .filter(|rect| rect.is_finite());
            if let Some(rect) = dragged_rect {
                ui.painter().rect_filled(rect, 0.0, overlay);
            }

            if self.editor.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    RichText::new("No states yet. Use \"Add State\" to create one.")
                        .color(COLOR_TEXT_MUTED),
                );
            }
        });

        self.row_rects = row_rects;
    }
}
