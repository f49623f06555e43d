//! Configuration defaults for rendering and the interactive view.

use std::f64::consts::PI;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for drawing a figure.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output file for the SVG backend and for exports.
    pub svg_path: PathBuf,
    /// SVG image size in pixels.
    pub svg_size: (u32, u32),
    /// Caption font size.
    pub caption_size: u32,
    /// Axis label font size.
    pub label_size: u32,
    /// Number of tick labels per axis.
    pub tick_labels: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            svg_path: PathBuf::from("magnetometer.svg"),
            svg_size: (800, 600),
            caption_size: 20,
            label_size: 14,
            tick_labels: 8,
        }
    }
}

/// Configuration for the interactive terminal view.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Yaw/pitch change per key press, in radians.
    pub rotation_step: f64,
    /// Scale change per key press.
    pub zoom_step: f64,
    /// How long to wait for input before redrawing.
    pub poll_interval: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rotation_step: PI / 36.0, // 5 degrees
            zoom_step: 0.05,
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Drawing configuration.
    pub render: RenderConfig,
    /// Interactive view configuration.
    pub viewer: ViewerConfig,
}
