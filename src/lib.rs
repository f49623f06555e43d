//! Magview - a terminal 3D plot view for magnetometer data.
//!
//! Magview draws an empty, labelled 3D scatter-plot axes with `plotters`,
//! either into an interactive full-screen terminal view or into an SVG file.
//!
//! # Features
//!
//! - Backend selection with availability checks
//! - Braille-resolution terminal rendering of 3D charts
//! - Keyboard rotation and zoom of the view
//! - SVG export
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```no_run
//! use magview::{AxisLabels, PlotRenderer};
//!
//! let mut renderer = PlotRenderer::new();
//! renderer.configure_backend("svg")?;
//!
//! let mut figure = renderer.create_figure();
//! let axes = renderer.add_subplot_3d(&mut figure)?;
//! let labels = AxisLabels::magnetometer();
//! renderer.set_labels(axes, &labels.title, &labels.x, &labels.y, &labels.z);
//!
//! renderer.show(figure)?;
//! # Ok::<(), magview::MagviewError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod backend;
pub mod config;
pub mod error;
pub mod figure;
pub mod render;
pub mod renderer;
pub mod ui;
pub mod viewer;

pub use backend::RenderBackend;
pub use config::{Config, RenderConfig, ViewerConfig};
pub use error::{MagviewError, Result};
pub use figure::{AxisLabels, Axes3D, Figure, Projection, ViewProjection};
pub use render::CellGrid;
pub use renderer::PlotRenderer;
