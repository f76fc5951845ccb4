//! Native egui app for editing the state/variant table.

mod state_feedback;
mod state_ops;
mod style;
mod ui;

use eframe::egui;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use state_feedback::Feedback;
use style::*;
use variantgrid_core::{Config, DragGesture, RowId, TableEditor};

/// Native egui application shell.
///
/// Owns the table editor and the active drag gesture. Widgets only record
/// [`TableAction`]s while drawing; the actions are applied once the frame's
/// UI has been laid out.
pub(crate) struct VariantGridApp {
    editor: TableEditor,
    drag: Option<DragGesture>,
    config: Config,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    /// Screen rect of each row from the last frame, by table position.
    row_rects: Vec<egui::Rect>,
    style_applied: bool,
}

/// User intent recorded while rendering a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableAction {
    AddRow,
    DeleteRow(RowId),
    AddColumn,
    DeleteColumn,
    BeginDrag { row_id: RowId, index: usize },
    HoverRow(usize),
    EndDrag,
}

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    feedback: Feedback,
    /// How many same-kind reports were folded into this toast.
    repeats: u32,
    expires_at: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(3);
const TOAST_LIMIT: usize = 4;
const FEEDBACK_REPAINT_INTERVAL: Duration = Duration::from_millis(250);
#[doc = "Minimum enforced window size to keep the toolbar and grid usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 320.0];
const ROW_HEIGHT: f32 = 36.0;
const HEADER_HEIGHT: f32 = 30.0;

impl VariantGridApp {
    /// Construct the app with the initial one-row table.
    pub(crate) fn new(config: Config) -> Self {
        Self {
            editor: TableEditor::new(),
            drag: None,
            config,
            status: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            row_rects: Vec::new(),
            style_applied: false,
        }
    }

    fn expire_feedback(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }
    }

    /// Draws one frame and applies every action recorded while drawing.
    pub(crate) fn run_frame(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        self.expire_feedback(Instant::now());

        let mut actions = Vec::new();
        self.render_toolbar(ctx, &mut actions);
        self.render_status_bar(ctx);
        self.render_table_panel(ctx, &mut actions);
        self.render_toasts(ctx);

        // A release can land outside every row, so end the drag globally.
        if self.drag.is_some() && ctx.input(|input| !input.pointer.primary_down()) {
            actions.push(TableAction::EndDrag);
        }
        for action in actions {
            self.apply_action(action);
        }

        if self.drag.is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            ctx.request_repaint();
        } else if self.status.is_some() || !self.toasts.is_empty() {
            ctx.request_repaint_after(FEEDBACK_REPAINT_INTERVAL);
        }
    }
}

impl eframe::App for VariantGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

#[cfg(test)]
mod tests;
