//! State transitions for toolbar actions, row deletion, and drag reordering.

use super::{Feedback, TableAction, VariantGridApp};
use tracing::{debug, info, warn};
use variantgrid_core::{state_name, variant_label, DragGesture, RowMove};

impl VariantGridApp {
    pub(super) fn apply_action(&mut self, action: TableAction) {
        match action {
            TableAction::AddRow => {
                let id = self.editor.add_row();
                let name = self
                    .editor
                    .row(id)
                    .map_or_else(|| state_name(id), |row| row.name.clone());
                self.report(Feedback::RowAdded(name));
            }
            TableAction::DeleteRow(id) => {
                if self.drag.map(|gesture| gesture.row_id()) == Some(id) {
                    self.drag = None;
                }
                match self.editor.delete_row(id) {
                    Some(row) => self.report(Feedback::RowDeleted(row.name)),
                    None => debug!(row_id = id.0, "delete ignored; row already gone"),
                }
            }
            TableAction::AddColumn => {
                let label = self.editor.add_column();
                self.report(Feedback::ColumnAdded(label));
            }
            TableAction::DeleteColumn => {
                let columns = self.editor.column_count();
                if self.editor.delete_column() == 0 {
                    self.report(Feedback::NoColumnsLeft);
                } else {
                    self.report(Feedback::ColumnDeleted(variant_label(columns as u64)));
                }
            }
            TableAction::BeginDrag { row_id, index } => {
                debug!(row_id = row_id.0, index, "drag started");
                self.drag = Some(DragGesture::start(row_id, index));
            }
            TableAction::HoverRow(index) => self.hover_drag(index),
            TableAction::EndDrag => self.finish_drag(),
        }
    }

    fn hover_drag(&mut self, hovered_index: usize) {
        let Some(gesture) = self.drag else {
            return;
        };
        if self.editor.index_of(gesture.row_id()) != Some(gesture.tracked_index()) {
            warn!(
                row_id = gesture.row_id().0,
                tracked = gesture.tracked_index(),
                "dragged row moved outside the gesture; dropping drag"
            );
            self.drag = None;
            return;
        }

        let (next, row_move) = gesture.hover(hovered_index);
        if self.config.gesture_trace {
            info!(
                target: "variantgrid_gui::gesture",
                row_id = gesture.row_id().0,
                tracked = gesture.tracked_index(),
                hovered = hovered_index,
                moved = row_move.is_some(),
                "drag hover"
            );
        }
        let Some(RowMove { from, to }) = row_move else {
            return;
        };
        match self.editor.move_row(from, to) {
            Ok(()) => self.drag = Some(next),
            Err(err) => {
                warn!("rejected row move {} -> {}: {}", from, to, err);
                self.drag = None;
            }
        }
    }

    fn finish_drag(&mut self) {
        let Some(gesture) = self.drag.take() else {
            return;
        };
        match gesture.finish() {
            Some(RowMove { from, to }) => {
                debug!(row_id = gesture.row_id().0, from, to, "drag finished");
            }
            None => debug!(row_id = gesture.row_id().0, "drag finished in place"),
        }
    }
}
