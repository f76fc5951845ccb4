//! UI panel modules extracted from the main app update loop.

/// Single table row rendering and drag gesture detection.
pub(super) mod row_view;
/// Bottom status bar content.
pub(super) mod status_bar;
/// Central grid with header and rows.
pub(super) mod table_panel;
/// Transient toast notifications.
pub(super) mod toasts;
/// Heading and add/delete controls.
pub(super) mod toolbar;
