//! One table row: name, delete control, variant cells, and drag gestures.
//!
//! The row view never mutates the table. It records what the pointer did as
//! [`TableAction`]s and leaves applying them to the owning app.

use super::super::*;
use eframe::egui::{self, RichText};
use egui_extras::TableRow;
use variantgrid_core::Row;

pub(crate) struct RowViewProps<'a> {
    /// Position of `row` in the table as rendered this frame.
    pub(crate) index: usize,
    pub(crate) row: &'a Row,
    pub(crate) column_count: usize,
    pub(crate) drag: Option<DragGesture>,
}

/// Draws one row and records its pointer gestures.
///
/// # Returns
/// The screen rect covered by the row, used by the table panel to dim the
/// dragged row as a whole.
pub(crate) fn render_row_view(
    table_row: &mut TableRow<'_, '_>,
    props: RowViewProps<'_>,
    actions: &mut Vec<TableAction>,
) -> egui::Rect {
    let RowViewProps {
        index,
        row,
        column_count,
        drag,
    } = props;

    table_row.col(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&row.name).color(COLOR_TEXT_PRIMARY));
            let delete = egui::Button::new(RichText::new("Delete").color(egui::Color32::WHITE))
                .fill(COLOR_DANGER)
                .small();
            if ui.add(delete).clicked() {
                actions.push(TableAction::DeleteRow(row.id));
            }
        });
    });
    for variant in row.variants.iter().take(column_count) {
        table_row.col(|ui| {
            ui.label(variant);
        });
    }

    let response = table_row.response();
    if response.drag_started_by(egui::PointerButton::Primary) {
        actions.push(TableAction::BeginDrag {
            row_id: row.id,
            index,
        });
    } else if drag.is_some() {
        if response.contains_pointer() {
            actions.push(TableAction::HoverRow(index));
        }
    } else if response.hovered() {
        response.ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }
    response.rect
}
