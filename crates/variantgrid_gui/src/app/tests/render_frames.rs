//! Headless frame tests for the toolbar, grid, and drag release handling.

use super::*;

#[test]
fn rendering_frames_does_not_mutate_table() {
    let mut harness = make_app_with_rows(3);
    harness.app.apply_action(TableAction::AddColumn);
    let before = harness.app.editor.clone();

    let ctx = egui::Context::default();
    for _ in 0..3 {
        run_frame_once(&mut harness.app, &ctx, egui::RawInput::default());
    }

    assert_eq!(harness.app.editor, before);
    assert!(harness.app.style_applied);
}

#[test]
fn empty_table_renders_without_variant_headers() {
    let mut harness = make_app();
    harness.app.apply_action(TableAction::DeleteRow(RowId(1)));
    assert!(harness.app.editor.column_headers().is_empty());

    let ctx = egui::Context::default();
    run_frame_once(&mut harness.app, &ctx, egui::RawInput::default());

    assert!(harness.app.editor.is_empty());
}

#[test]
fn zero_column_table_renders() {
    let mut harness = make_app_with_rows(2);
    harness.app.apply_action(TableAction::DeleteColumn);

    let ctx = egui::Context::default();
    run_frame_once(&mut harness.app, &ctx, egui::RawInput::default());

    assert_eq!(row_ids(&harness.app), vec![1, 2]);
    assert_eq!(harness.app.editor.column_count(), 0);
}

#[test]
fn released_pointer_ends_active_drag() {
    let mut harness = make_app_with_rows(3);
    harness.app.apply_action(TableAction::BeginDrag {
        row_id: RowId(2),
        index: 1,
    });
    harness.app.apply_action(TableAction::HoverRow(0));
    assert!(harness.app.drag.is_some());

    // No button is held in a default input, which reads as a release.
    let ctx = egui::Context::default();
    run_frame_once(&mut harness.app, &ctx, egui::RawInput::default());

    assert!(harness.app.drag.is_none());
    assert_eq!(row_ids(&harness.app), vec![2, 1, 3]);
}

#[test]
fn row_rects_follow_table_order() {
    let mut harness = make_app_with_rows(3);
    let ctx = egui::Context::default();
    settle_layout(&mut harness.app, &ctx);

    let rects = &harness.app.row_rects;
    assert_eq!(rects.len(), 3);
    assert!(rects.iter().all(|rect| rect.is_finite()));
    assert!(rects
        .windows(2)
        .all(|pair| pair[0].center().y < pair[1].center().y));
}

#[test]
fn drag_overlay_alpha_tracks_configured_opacity() {
    assert_eq!(drag_overlay_color(1.0).a(), 0);
    assert_eq!(drag_overlay_color(0.0).a(), 255);
    assert_eq!(drag_overlay_color(0.5).a(), 128);
    // Out-of-range values clamp instead of wrapping.
    assert_eq!(drag_overlay_color(-2.0).a(), 255);
}
