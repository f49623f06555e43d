//! SVG output for figures.
//!
//! The output format follows the file extension. Only `.svg` is written;
//! raster extensions are refused instead of getting SVG markup.

use std::path::Path;

use plotters::prelude::*;

use super::{draw_figure, PlotStyle};
use crate::config::RenderConfig;
use crate::error::{MagviewError, Result};
use crate::figure::Figure;

/// Image formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Scalable vector graphics.
    Svg,
    /// PNG, JPEG or BMP raster image.
    Raster,
}

impl ExportFormat {
    /// Pick the format from the extension of `path`, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .ok_or_else(|| MagviewError::export(path, "file has no extension"))?
            .to_str()
            .ok_or_else(|| MagviewError::export(path, "file extension is not valid unicode"))?;

        match extension.to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" | "jpg" | "jpeg" | "bmp" => Ok(ExportFormat::Raster),
            other => Err(MagviewError::export(
                path,
                format!("unrecognized extension \"{other}\", expected svg"),
            )),
        }
    }
}

/// Write `figure` to `path`, which must name an `.svg` file.
pub fn export(figure: &Figure, path: &Path, config: &RenderConfig) -> Result<()> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Svg => {},
        // Raster text needs a font rasterizer, which this build leaves out.
        ExportFormat::Raster => {
            return Err(MagviewError::export(
                path,
                "raster images are not supported, use an .svg file",
            ));
        },
    }

    let style = PlotStyle::svg(config);

    {
        let area = SVGBackend::new(path, config.svg_size).into_drawing_area();
        draw_figure(&area, figure, &style).map_err(|e| MagviewError::export(path, e))?;
    }

    tracing::info!("Exported figure to {}", path.display());
    Ok(())
}

/// Render `figure` as an SVG document in memory.
pub fn render_string(figure: &Figure, config: &RenderConfig) -> Result<String> {
    let style = PlotStyle::svg(config);
    let mut document = String::new();

    {
        let area = SVGBackend::with_string(&mut document, config.svg_size).into_drawing_area();
        draw_figure(&area, figure, &style)?;
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::AxisLabels;

    fn magnetometer_figure() -> Figure {
        let mut figure = Figure::new();
        let axes = figure.add_subplot_3d().unwrap();
        let labels = AxisLabels::magnetometer();
        axes.set_labels(labels.title, labels.x, labels.y, labels.z);
        figure
    }

    #[test]
    fn document_carries_title_and_labels() {
        let svg = render_string(&magnetometer_figure(), &RenderConfig::default()).unwrap();

        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("3D Scatter Plot of Magnetometer Data").count(), 1);
        assert_eq!(svg.matches("X [uT]").count(), 1);
        assert_eq!(svg.matches("Y [uT]").count(), 1);
        assert_eq!(svg.matches("Z [uT]").count(), 1);
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn document_uses_configured_size() {
        let config = RenderConfig {
            svg_size: (320, 240),
            ..RenderConfig::default()
        };
        let svg = render_string(&magnetometer_figure(), &config).unwrap();
        assert!(svg.contains("width=\"320\""));
        assert!(svg.contains("height=\"240\""));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");

        export(&magnetometer_figure(), &path, &RenderConfig::default()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Z [uT]"));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("view.svg")).unwrap(), ExportFormat::Svg);
        assert_eq!(ExportFormat::from_path(Path::new("VIEW.SVG")).unwrap(), ExportFormat::Svg);
        assert_eq!(
            ExportFormat::from_path(Path::new("view.png")).unwrap(),
            ExportFormat::Raster
        );
        assert!(matches!(
            ExportFormat::from_path(Path::new("view")),
            Err(MagviewError::Export { .. })
        ));
        assert!(matches!(
            ExportFormat::from_path(Path::new("view.pdf")),
            Err(MagviewError::Export { .. })
        ));
    }

    #[test]
    fn raster_export_is_refused_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");

        let err = export(&magnetometer_figure(), &path, &RenderConfig::default()).unwrap_err();

        assert!(matches!(err, MagviewError::Export { .. }));
        assert!(err.to_string().contains("raster images are not supported"));
        assert!(!path.exists());
    }

    #[test]
    fn unrecognized_or_missing_extension_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["plot.txt", "plot"] {
            let path = dir.path().join(name);
            let err = export(&magnetometer_figure(), &path, &RenderConfig::default()).unwrap_err();
            assert!(matches!(err, MagviewError::Export { .. }));
            assert!(!path.exists());
        }
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.svg");

        let err = export(&magnetometer_figure(), &path, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, MagviewError::Export { .. }));
    }
}
