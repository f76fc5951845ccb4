//! Desktop editor library entry point.
//!
//! Exposes a `run` helper so the workspace root can launch the editor window
//! without duplicating initialization logic.

mod app;

use app::VariantGridApp;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;
use variantgrid_core::Config;

const DEFAULT_LOG_FILTER: &str = "variantgrid_core=info,variantgrid_gui=info";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the table editor window with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when the environment config is invalid.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    info!(
        drag_opacity = config.drag_opacity,
        gesture_trace = config.gesture_trace,
        "starting table editor"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("VariantGrid"),
        ..Default::default()
    };
    let app = VariantGridApp::new(config);

    eframe::run_native("VariantGrid", options, Box::new(|_cc| Ok(Box::new(app))))
}
