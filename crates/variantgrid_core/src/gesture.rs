//! Drag-to-reorder gesture state.
//!
//! A gesture is a small `Copy` value. Every transition returns the next
//! gesture instead of mutating the current one, and reports the row move the
//! owner should apply, if any.

use crate::models::row::RowId;

/// A single row move: take the row at `from` and reinsert it at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMove {
    pub from: usize,
    pub to: usize,
}

/// An in-progress row drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    row_id: RowId,
    origin_index: usize,
    tracked_index: usize,
}

impl DragGesture {
    /// Begin dragging the row `row_id`, currently rendered at `index`.
    pub fn start(row_id: RowId, index: usize) -> Self {
        Self {
            row_id,
            origin_index: index,
            tracked_index: index,
        }
    }

    /// Row being dragged. Use this, not an index, to style the dragged row.
    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Where the dragged row sits now, after every move issued so far.
    pub fn tracked_index(&self) -> usize {
        self.tracked_index
    }

    /// The pointer is over the row rendered at `hovered_index`.
    ///
    /// # Returns
    /// The next gesture plus a move when `hovered_index` differs from the
    /// tracked index. Hovering the row the dragged row already occupies
    /// yields no move, so a continued drag issues one move per row crossed.
    pub fn hover(self, hovered_index: usize) -> (Self, Option<RowMove>) {
        if hovered_index == self.tracked_index {
            return (self, None);
        }
        let row_move = RowMove {
            from: self.tracked_index,
            to: hovered_index,
        };
        (
            Self {
                tracked_index: hovered_index,
                ..self
            },
            Some(row_move),
        )
    }

    /// End the gesture.
    ///
    /// # Returns
    /// The net displacement (origin to final index), or `None` when the row
    /// ended where it started. Moves were already applied during `hover`.
    pub fn finish(self) -> Option<RowMove> {
        (self.origin_index != self.tracked_index).then_some(RowMove {
            from: self.origin_index,
            to: self.tracked_index,
        })
    }
}
