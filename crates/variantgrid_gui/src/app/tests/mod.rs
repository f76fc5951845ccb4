//! App tests that exercise toolbar actions, drag reordering, and rendering.

use super::*;

mod render_frames;
mod state_basics;

struct TestHarness {
    app: VariantGridApp,
}

fn make_app() -> TestHarness {
    TestHarness {
        app: VariantGridApp::new(Config::default()),
    }
}

fn make_app_with_rows(count: usize) -> TestHarness {
    let mut harness = make_app();
    for _ in 1..count {
        harness.app.apply_action(TableAction::AddRow);
    }
    harness
}

fn row_ids(app: &VariantGridApp) -> Vec<u64> {
    app.editor.rows().iter().map(|row| row.id.0).collect()
}

fn run_frame_once(app: &mut VariantGridApp, ctx: &egui::Context, input: egui::RawInput) {
    let _ = ctx.run(input, |ctx| {
        app.run_frame(ctx);
    });
}

const TEST_SCREEN: egui::Vec2 = egui::vec2(1024.0, 768.0);

/// Input for frame number `frame` of a fixed-size 60 Hz test window.
fn test_input(events: Vec<egui::Event>, frame: u32) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, TEST_SCREEN)),
        time: Some(f64::from(frame) / 60.0),
        events,
        ..Default::default()
    }
}

/// Runs enough frames for the table to finish its sizing pass.
fn settle_layout(app: &mut VariantGridApp, ctx: &egui::Context) -> u32 {
    const WARM_UP_FRAMES: u32 = 4;
    for frame in 0..WARM_UP_FRAMES {
        run_frame_once(app, ctx, test_input(Vec::new(), frame));
    }
    WARM_UP_FRAMES
}
