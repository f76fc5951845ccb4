//! Configuration loading from environment variables.

use crate::error::GridError;
use std::env;

const DEFAULT_DRAG_OPACITY: f32 = 0.5;
const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Runtime configuration for VariantGrid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Opacity used to paint the row currently being dragged.
    pub drag_opacity: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// Log every hover transition of a drag gesture.
    pub gesture_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drag_opacity: DEFAULT_DRAG_OPACITY,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            gesture_trace: false,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

/// Parse a drag opacity value, rejecting anything outside `0.0..=1.0`.
///
/// # Errors
/// Returns [`GridError::InvalidConfig`] when the value is not a number or is
/// out of range.
pub fn parse_drag_opacity(value: &str) -> Result<f32, GridError> {
    let invalid = || GridError::InvalidConfig {
        key: "VARIANTGRID_DRAG_OPACITY",
        value: value.to_string(),
    };
    let opacity: f32 = value.trim().parse().map_err(|_| invalid())?;
    if !(0.0..=1.0).contains(&opacity) {
        return Err(invalid());
    }
    Ok(opacity)
}

fn parse_dimension(value: Option<String>, default: f32) -> f32 {
    value
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .filter(|size| size.is_finite() && *size > 0.0)
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] when `VARIANTGRID_DRAG_OPACITY` is
    /// set but unusable. Unparsable window sizes fall back to defaults.
    pub fn from_env() -> Result<Self, GridError> {
        let drag_opacity = match env::var("VARIANTGRID_DRAG_OPACITY") {
            Ok(raw) => parse_drag_opacity(&raw)?,
            Err(_) => DEFAULT_DRAG_OPACITY,
        };
        Ok(Self {
            drag_opacity,
            window_width: parse_dimension(
                env::var("VARIANTGRID_WINDOW_WIDTH").ok(),
                DEFAULT_WINDOW_WIDTH,
            ),
            window_height: parse_dimension(
                env::var("VARIANTGRID_WINDOW_HEIGHT").ok(),
                DEFAULT_WINDOW_HEIGHT,
            ),
            gesture_trace: env_flag_enabled("VARIANTGRID_GESTURE_TRACE"),
        })
    }
}
