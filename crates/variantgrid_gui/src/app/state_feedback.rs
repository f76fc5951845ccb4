//! Action feedback: one report feeds both the status bar and the toast stack.

use super::{StatusMessage, ToastMessage, VariantGridApp, STATUS_TTL, TOAST_LIMIT, TOAST_TTL};
use std::mem::discriminant;
use std::time::Instant;

/// What a completed table action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Feedback {
    RowAdded(String),
    RowDeleted(String),
    /// Label written into the new column's cells.
    ColumnAdded(String),
    /// Positional header of the column that was removed.
    ColumnDeleted(String),
    NoColumnsLeft,
}

impl Feedback {
    pub(super) fn message(&self) -> String {
        match self {
            Self::RowAdded(name) => format!("Added {}.", name),
            Self::RowDeleted(name) => format!("Deleted {}.", name),
            Self::ColumnAdded(label) => format!("Added {} to every state.", label),
            Self::ColumnDeleted(header) => format!("Deleted {} column.", header),
            Self::NoColumnsLeft => "No variants left to delete.".to_string(),
        }
    }

    /// Whether the report touched rows (states) rather than columns (variants).
    pub(super) fn is_row_change(&self) -> bool {
        matches!(self, Self::RowAdded(_) | Self::RowDeleted(_))
    }
}

impl VariantGridApp {
    /// Shows `feedback` in the status bar and stacks it as a toast.
    ///
    /// A report of the same kind as the newest live toast replaces that
    /// toast and bumps its repeat count, so clicking "Add Variant" five times
    /// leaves one toast naming the latest label instead of five.
    pub(super) fn report(&mut self, feedback: Feedback) {
        let now = Instant::now();
        self.status = Some(StatusMessage {
            text: feedback.message(),
            expires_at: now + STATUS_TTL,
        });

        if let Some(last) = self
            .toasts
            .back_mut()
            .filter(|toast| discriminant(&toast.feedback) == discriminant(&feedback))
        {
            last.feedback = feedback;
            last.repeats += 1;
            last.expires_at = now + TOAST_TTL;
            return;
        }
        if self.toasts.len() == TOAST_LIMIT {
            self.toasts.pop_front();
        }
        self.toasts.push_back(ToastMessage {
            feedback,
            repeats: 1,
            expires_at: now + TOAST_TTL,
        });
    }
}
