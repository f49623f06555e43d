//! Chart drawing with `plotters`.
//!
//! [`draw_figure`] works on any `plotters` drawing area. The terminal view
//! draws through [`CellBackend`], file output goes through [`svg`].

mod cell;
pub mod svg;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::RenderConfig;
use crate::error::{MagviewError, Result};
use crate::figure::Figure;

pub use cell::{
    CellBackend, CellGrid, GridCell, Rgb, TextRun, CELL_PIXEL_HEIGHT, CELL_PIXEL_WIDTH,
};

const FONT_FAMILY: &str = "sans-serif";

/// Fraction of an axis' span between its end and its label.
const LABEL_OFFSET: f64 = 0.1;

/// Colours and sizes used to draw a chart.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Background fill.
    pub background: RGBColor,
    /// Caption, tick labels and axis labels.
    pub foreground: RGBColor,
    /// Major grid lines and axis lines.
    pub bold_grid: RGBAColor,
    /// Minor grid lines.
    pub light_grid: RGBAColor,
    /// Axis panel fill.
    pub panel: RGBAColor,
    /// Caption font size.
    pub caption_size: u32,
    /// Label font size.
    pub label_size: u32,
    /// Tick labels per axis.
    pub tick_labels: usize,
    /// Margin around the chart, in backend pixels.
    pub margin: u32,
}

impl PlotStyle {
    /// Style for SVG output: dark on white.
    pub fn svg(config: &RenderConfig) -> Self {
        Self {
            background: WHITE,
            foreground: BLACK,
            bold_grid: BLACK.mix(0.3),
            light_grid: BLACK.mix(0.1),
            panel: BLACK.mix(0.03),
            caption_size: config.caption_size,
            label_size: config.label_size,
            tick_labels: config.tick_labels,
            margin: 20,
        }
    }

    /// Style for the terminal raster.
    ///
    /// Minor grid lines and panels are left out, they turn into solid
    /// blocks of dots at braille resolution.
    pub fn terminal(
        background: RGBColor,
        foreground: RGBColor,
        grid: RGBColor,
        config: &RenderConfig,
    ) -> Self {
        Self {
            background,
            foreground,
            bold_grid: grid.mix(1.0),
            light_grid: TRANSPARENT_RGBA,
            panel: TRANSPARENT_RGBA,
            caption_size: config.caption_size,
            label_size: config.label_size,
            tick_labels: config.tick_labels.min(4),
            margin: 2,
        }
    }

    fn font(&self, size: u32) -> TextStyle<'static> {
        (FONT_FAMILY, size).into_font().color(&self.foreground)
    }
}

const TRANSPARENT_RGBA: RGBAColor = RGBAColor(0, 0, 0, 0.0);

/// Draw `figure` onto `area`.
///
/// Without axes only the background is drawn. With axes, the title becomes
/// the caption and each axis label is placed past the end of its axis.
pub fn draw_figure<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
    style: &PlotStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    area.fill(&style.background).map_err(MagviewError::render)?;

    let Some(axes) = figure.axes() else {
        return area.present().map_err(MagviewError::render);
    };

    let (x_range, y_range, z_range) = axes.ranges();

    // plotters treats y as vertical; magnetometer Z points up.
    let mut chart = ChartBuilder::on(area)
        .caption(axes.title(), style.font(style.caption_size))
        .margin(style.margin)
        .build_cartesian_3d(x_range.clone(), z_range.clone(), y_range.clone())
        .map_err(MagviewError::render)?;

    let view = axes.view();
    chart.with_projection(|mut pb| {
        pb.yaw = view.yaw;
        pb.pitch = view.pitch;
        pb.scale = view.scale;

        pb.into_matrix()
    });

    chart
        .configure_axes()
        .label_style(style.font(style.label_size))
        .bold_grid_style(style.bold_grid)
        .light_grid_style(style.light_grid)
        .axis_panel_style(style.panel)
        .x_labels(style.tick_labels)
        .y_labels(style.tick_labels)
        .z_labels(style.tick_labels)
        .draw()
        .map_err(MagviewError::render)?;

    let past = |start: f64, end: f64| end + (end - start) * LABEL_OFFSET;
    let label_font = style.font(style.label_size);
    let labels = [
        (
            axes.x_label(),
            (past(x_range.start, x_range.end), z_range.start, y_range.start),
        ),
        (
            axes.y_label(),
            (x_range.start, z_range.start, past(y_range.start, y_range.end)),
        ),
        (
            axes.z_label(),
            (x_range.start, past(z_range.start, z_range.end), y_range.start),
        ),
    ];

    chart
        .draw_series(
            labels
                .into_iter()
                .filter(|(text, _)| !text.is_empty())
                .map(|(text, pos)| Text::new(text.to_string(), pos, label_font.clone())),
        )
        .map_err(MagviewError::render)?;

    area.present().map_err(MagviewError::render)
}

/// Draw `figure` into a fresh grid of `cols` x `rows` cells.
///
/// This never blocks and never touches the terminal.
pub fn render_to_grid(
    figure: &Figure,
    cols: u16,
    rows: u16,
    style: &PlotStyle,
) -> Result<CellGrid> {
    let mut grid = CellGrid::new(cols, rows);
    if cols == 0 || rows == 0 {
        return Ok(grid);
    }

    {
        let area = CellBackend::new(&mut grid).into_drawing_area();
        draw_figure(&area, figure, style)?;
    }

    tracing::debug!(
        cols,
        rows,
        texts = grid.texts().len(),
        dots = grid.dot_count(),
        "Rendered figure to grid"
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::AxisLabels;

    fn terminal_style() -> PlotStyle {
        PlotStyle::terminal(BLACK, WHITE, RGBColor(128, 128, 128), &RenderConfig::default())
    }

    fn magnetometer_figure() -> Figure {
        let mut figure = Figure::new();
        let axes = figure.add_subplot_3d().unwrap();
        let labels = AxisLabels::magnetometer();
        axes.set_labels(labels.title, labels.x, labels.y, labels.z);
        figure
    }

    #[test]
    fn figure_without_axes_is_blank() {
        let grid = render_to_grid(&Figure::new(), 40, 20, &terminal_style()).unwrap();
        assert!(grid.texts().is_empty());
        assert_eq!(grid.dot_count(), 0);
        assert_eq!(grid.cell(0, 0).unwrap().bg, Some((0, 0, 0)));
    }

    #[test]
    fn labelled_axes_render_title_and_labels_once() {
        let grid = render_to_grid(&magnetometer_figure(), 100, 40, &terminal_style()).unwrap();

        assert_eq!(grid.text_count("3D Scatter Plot of Magnetometer Data"), 1);
        assert_eq!(grid.text_count("X [uT]"), 1);
        assert_eq!(grid.text_count("Y [uT]"), 1);
        assert_eq!(grid.text_count("Z [uT]"), 1);
        assert_eq!(grid.marker_count(), 0);
        assert!(grid.dot_count() > 0, "axes should leave grid lines");
    }

    #[test]
    fn runtime_labels_outlive_their_figure_in_the_grid() {
        let grid = {
            let mut figure = Figure::new();
            let axes = figure.add_subplot_3d().unwrap();
            let unit = String::from("nT");
            axes.set_labels(
                format!("Field [{unit}]"),
                format!("Bx [{unit}]"),
                format!("By [{unit}]"),
                format!("Bz [{unit}]"),
            );
            render_to_grid(&figure, 100, 40, &terminal_style()).unwrap()
        };

        assert!(grid.contains_text("Field [nT]"));
        assert_eq!(grid.text_count("Bx [nT]"), 1);
        assert_eq!(grid.text_count("By [nT]"), 1);
        assert_eq!(grid.text_count("Bz [nT]"), 1);
    }

    #[test]
    fn title_sits_on_the_first_row() {
        let grid = render_to_grid(&magnetometer_figure(), 100, 40, &terminal_style()).unwrap();
        let title = grid
            .texts()
            .iter()
            .find(|run| run.text == "3D Scatter Plot of Magnetometer Data")
            .unwrap();
        assert!(title.row <= 1);
        assert_eq!(title.color, (255, 255, 255));
    }

    #[test]
    fn empty_labels_are_not_drawn() {
        let mut figure = Figure::new();
        figure.add_subplot_3d().unwrap();
        let grid = render_to_grid(&figure, 80, 30, &terminal_style()).unwrap();
        assert!(grid.texts().iter().all(|run| !run.text.trim().is_empty()));
    }

    #[test]
    fn zero_sized_grid_is_empty() {
        let grid = render_to_grid(&magnetometer_figure(), 0, 10, &terminal_style()).unwrap();
        assert_eq!(grid.cols(), 0);
        assert!(grid.texts().is_empty());
    }
}
