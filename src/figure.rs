//! Figure and 3D axes handles.
//!
//! A [`Figure`] owns at most one [`Axes3D`]. The axes only carry display
//! configuration: title, axis labels, axis ranges and the view projection.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6, TAU};
use std::fmt;
use std::ops::{Add, Range};

use crate::error::{MagviewError, Result};

/// Title used for magnetometer plots.
pub const MAGNETOMETER_TITLE: &str = "3D Scatter Plot of Magnetometer Data";
/// X axis label used for magnetometer plots.
pub const MAGNETOMETER_X_LABEL: &str = "X [uT]";
/// Y axis label used for magnetometer plots.
pub const MAGNETOMETER_Y_LABEL: &str = "Y [uT]";
/// Z axis label used for magnetometer plots.
pub const MAGNETOMETER_Z_LABEL: &str = "Z [uT]";

/// Smallest allowed view scale.
pub const MIN_SCALE: f64 = 0.1;
/// Largest allowed view scale.
pub const MAX_SCALE: f64 = 2.0;

/// Projection mode of an axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Three-dimensional projection.
    ThreeD,
}

impl Projection {
    /// Get the projection name.
    pub fn name(self) -> &'static str {
        match self {
            Projection::ThreeD => "3d",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Camera orientation for a 3D chart.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ViewProjection {
    /// Rotation around the vertical axis, in radians.
    pub yaw: f64,
    /// Tilt towards the viewer, in radians.
    pub pitch: f64,
    /// Zoom factor.
    pub scale: f64,
}

impl ViewProjection {
    /// Bring the projection back into its valid range.
    ///
    /// Yaw wraps into `[0, 2π)`, pitch clamps to `[-π/2, π/2]` and scale to
    /// `[MIN_SCALE, MAX_SCALE]`.
    pub fn normalized(self) -> Self {
        Self {
            yaw: self.yaw.rem_euclid(TAU),
            pitch: self.pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
            scale: self.scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    /// Format for a status line.
    pub fn describe(&self) -> String {
        format!(
            "yaw: {:.1}°, pitch: {:.1}°, scale: {:.2}",
            self.yaw.to_degrees(),
            self.pitch.to_degrees(),
            self.scale
        )
    }
}

impl Default for ViewProjection {
    fn default() -> Self {
        Self {
            yaw: FRAC_PI_3,
            pitch: FRAC_PI_6,
            scale: 0.75,
        }
    }
}

impl Add for ViewProjection {
    type Output = ViewProjection;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            yaw: self.yaw + rhs.yaw,
            pitch: self.pitch + rhs.pitch,
            scale: self.scale + rhs.scale,
        }
        .normalized()
    }
}

/// Title and axis labels of a 3D axes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisLabels {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x: String,
    /// Y axis label.
    pub y: String,
    /// Z axis label.
    pub z: String,
}

impl AxisLabels {
    /// Labels for a magnetometer scatter plot.
    pub fn magnetometer() -> Self {
        Self {
            title: MAGNETOMETER_TITLE.to_string(),
            x: MAGNETOMETER_X_LABEL.to_string(),
            y: MAGNETOMETER_Y_LABEL.to_string(),
            z: MAGNETOMETER_Z_LABEL.to_string(),
        }
    }
}

/// A single 3D plot area.
#[derive(Debug, Clone)]
pub struct Axes3D {
    labels: AxisLabels,
    view: ViewProjection,
    x_range: Range<f64>,
    y_range: Range<f64>,
    z_range: Range<f64>,
}

impl Axes3D {
    fn new() -> Self {
        Self {
            labels: AxisLabels::default(),
            view: ViewProjection::default(),
            x_range: -1.0..1.0,
            y_range: -1.0..1.0,
            z_range: -1.0..1.0,
        }
    }

    /// Set the title and the three axis labels.
    pub fn set_labels(
        &mut self,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        z_label: impl Into<String>,
    ) {
        self.labels = AxisLabels {
            title: title.into(),
            x: x_label.into(),
            y: y_label.into(),
            z: z_label.into(),
        };
    }

    /// Get all labels.
    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.labels.title
    }

    /// Get the X axis label.
    pub fn x_label(&self) -> &str {
        &self.labels.x
    }

    /// Get the Y axis label.
    pub fn y_label(&self) -> &str {
        &self.labels.y
    }

    /// Get the Z axis label.
    pub fn z_label(&self) -> &str {
        &self.labels.z
    }

    /// Get the projection mode. Always 3D.
    pub fn projection_mode(&self) -> Projection {
        Projection::ThreeD
    }

    /// Number of data series attached. Axes carry no data.
    pub fn series_count(&self) -> usize {
        0
    }

    /// Get the view projection.
    pub fn view(&self) -> ViewProjection {
        self.view
    }

    /// Set the view projection.
    pub fn set_view(&mut self, view: ViewProjection) {
        self.view = view.normalized();
    }

    /// Get the axis ranges as (x, y, z).
    pub fn ranges(&self) -> (Range<f64>, Range<f64>, Range<f64>) {
        (
            self.x_range.clone(),
            self.y_range.clone(),
            self.z_range.clone(),
        )
    }
}

/// Top-level container for a plot.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    axes: Option<Axes3D>,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the 3D axes. A figure holds at most one.
    pub fn add_subplot_3d(&mut self) -> Result<&mut Axes3D> {
        if self.axes.is_some() {
            return Err(MagviewError::SubplotExists);
        }
        Ok(self.axes.insert(Axes3D::new()))
    }

    /// Get the axes, if added.
    pub fn axes(&self) -> Option<&Axes3D> {
        self.axes.as_ref()
    }

    /// Get the axes mutably, if added.
    pub fn axes_mut(&mut self) -> Option<&mut Axes3D> {
        self.axes.as_mut()
    }

    /// Number of axes in this figure (0 or 1).
    pub fn axes_count(&self) -> usize {
        usize::from(self.axes.is_some())
    }
}
