//! The plotting façade.
//!
//! [`PlotRenderer`] exposes the whole plotting workflow: pick a backend,
//! create a figure, add its 3D axes, label them and show the result.
//!
//! ```no_run
//! use magview::PlotRenderer;
//!
//! let mut renderer = PlotRenderer::new();
//! renderer.configure_backend("terminal")?;
//! let mut figure = renderer.create_figure();
//! let axes = renderer.add_subplot_3d(&mut figure)?;
//! renderer.set_labels(axes, "3D Scatter Plot of Magnetometer Data", "X [uT]", "Y [uT]", "Z [uT]");
//! renderer.show(figure)?;
//! # Ok::<(), magview::MagviewError>(())
//! ```

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::backend::{stdout_is_tty, RenderBackend};
use crate::config::Config;
use crate::error::{MagviewError, Result};
use crate::figure::{Axes3D, Figure};
use crate::render::{render_to_grid, svg, CellGrid};
use crate::ui::{Theme, ThemeColors};
use crate::viewer::{self, ViewerState};

/// Entry point for drawing figures.
#[derive(Debug)]
pub struct PlotRenderer {
    backend: Option<RenderBackend>,
    figures_created: usize,
    is_tty: bool,
    config: Config,
}

impl PlotRenderer {
    /// Create a renderer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a renderer with `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            backend: None,
            figures_created: 0,
            is_tty: stdout_is_tty(),
            config,
        }
    }

    /// Override terminal detection. Availability checks use this instead of stdout.
    pub fn assume_tty(mut self, is_tty: bool) -> Self {
        self.is_tty = is_tty;
        self
    }

    /// Get the configured backend, if any.
    pub fn backend(&self) -> Option<RenderBackend> {
        self.backend
    }

    /// Select the rendering backend by name.
    ///
    /// Must be called before the first figure is created.
    pub fn configure_backend(&mut self, name: &str) -> Result<RenderBackend> {
        if self.figures_created > 0 {
            return Err(MagviewError::BackendLocked);
        }

        let backend = name.parse::<RenderBackend>()?.check_available(self.is_tty)?;
        tracing::info!("Using {} backend", backend);
        self.backend = Some(backend);
        Ok(backend)
    }

    /// Create a new, empty figure.
    pub fn create_figure(&mut self) -> Figure {
        self.figures_created += 1;
        tracing::debug!(count = self.figures_created, "Figure created");
        Figure::new()
    }

    /// Add the 3D axes to `figure`.
    ///
    /// Without a configured backend this falls back to the default one and
    /// fails if there is none.
    pub fn add_subplot_3d<'f>(&mut self, figure: &'f mut Figure) -> Result<&'f mut Axes3D> {
        self.resolve_backend()?;
        figure.add_subplot_3d()
    }

    /// Set the title and axis labels of `axes`.
    pub fn set_labels(
        &self,
        axes: &mut Axes3D,
        title: &str,
        x_label: &str,
        y_label: &str,
        z_label: &str,
    ) {
        axes.set_labels(title, x_label, y_label, z_label);
    }

    /// Display `figure`.
    ///
    /// With the terminal backend this blocks until the user closes the view.
    /// With the SVG backend the figure is written to the configured file.
    pub fn show(&mut self, figure: Figure) -> Result<()> {
        let backend = self.resolve_backend()?;
        tracing::info!("Showing figure with {} backend", backend);

        match backend {
            RenderBackend::Terminal => self.show_terminal(figure),
            RenderBackend::Svg => {
                svg::export(&figure, &self.config.render.svg_path, &self.config.render)
            },
        }
    }

    /// Draw `figure` into a grid of `cols` x `rows` cells without blocking.
    pub fn render_to_buffer(&self, figure: &Figure, cols: u16, rows: u16) -> Result<CellGrid> {
        let colors = ThemeColors::from_theme(&Theme::default());
        render_to_grid(figure, cols, rows, &colors.plot_style(&self.config.render))
    }

    fn resolve_backend(&mut self) -> Result<RenderBackend> {
        if let Some(backend) = self.backend {
            return Ok(backend);
        }

        let backend = RenderBackend::detect_default(self.is_tty)?;
        tracing::info!("Defaulting to {} backend", backend);
        self.backend = Some(backend);
        Ok(backend)
    }

    fn show_terminal(&self, figure: Figure) -> Result<()> {
        let mut state = ViewerState::new(figure, self.config.clone());

        enable_raw_mode()?;
        let res = run_on_alternate_screen(&mut state);
        let restored = disable_raw_mode();

        res?;
        restored?;
        Ok(())
    }
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn run_on_alternate_screen(state: &mut ViewerState) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = viewer::run(&mut terminal, state);

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Projection, MAGNETOMETER_TITLE};

    #[test]
    fn configured_backend_allows_subplot() {
        let mut renderer = PlotRenderer::new().assume_tty(false);
        assert_eq!(renderer.configure_backend("svg").unwrap(), RenderBackend::Svg);

        let mut figure = renderer.create_figure();
        let axes = renderer.add_subplot_3d(&mut figure).unwrap();
        assert_eq!(axes.projection_mode(), Projection::ThreeD);
    }

    #[test]
    fn terminal_backend_unavailable_without_tty() {
        let mut renderer = PlotRenderer::new().assume_tty(false);
        let err = renderer.configure_backend("terminal").unwrap_err();
        assert!(err.is_backend_unavailable());
        assert_eq!(renderer.backend(), None);
    }

    #[test]
    fn subplot_without_backend_needs_a_default() {
        let mut headless = PlotRenderer::new().assume_tty(false);
        let mut figure = headless.create_figure();
        assert!(headless
            .add_subplot_3d(&mut figure)
            .unwrap_err()
            .is_backend_unavailable());
        assert_eq!(figure.axes_count(), 0);

        let mut interactive = PlotRenderer::new().assume_tty(true);
        let mut figure = interactive.create_figure();
        interactive.add_subplot_3d(&mut figure).unwrap();
        assert_eq!(interactive.backend(), Some(RenderBackend::Terminal));
    }

    #[test]
    fn backend_is_locked_after_first_figure() {
        let mut renderer = PlotRenderer::new().assume_tty(false);
        renderer.configure_backend("svg").unwrap();
        let _figure = renderer.create_figure();
        assert!(matches!(
            renderer.configure_backend("svg"),
            Err(MagviewError::BackendLocked)
        ));
    }

    #[test]
    fn create_figure_never_fails() {
        let mut renderer = PlotRenderer::new().assume_tty(false);
        let first = renderer.create_figure();
        let second = renderer.create_figure();
        assert_eq!(first.axes_count(), 0);
        assert_eq!(second.axes_count(), 0);
        assert!(matches!(
            renderer.configure_backend("svg"),
            Err(MagviewError::BackendLocked)
        ));
    }

    #[test]
    fn reconfiguring_before_figures_replaces_backend() {
        let mut renderer = PlotRenderer::new().assume_tty(true);
        renderer.configure_backend("svg").unwrap();
        renderer.configure_backend("terminal").unwrap();
        assert_eq!(renderer.backend(), Some(RenderBackend::Terminal));
    }

    #[test]
    fn show_with_svg_backend_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.svg_path = dir.path().join("out.svg");

        let mut renderer = PlotRenderer::with_config(config).assume_tty(false);
        renderer.configure_backend("svg").unwrap();
        let mut figure = renderer.create_figure();
        let axes = renderer.add_subplot_3d(&mut figure).unwrap();
        renderer.set_labels(axes, MAGNETOMETER_TITLE, "X [uT]", "Y [uT]", "Z [uT]");
        renderer.show(figure).unwrap();

        let svg = std::fs::read_to_string(dir.path().join("out.svg")).unwrap();
        assert!(svg.contains(MAGNETOMETER_TITLE));
    }

    #[test]
    fn show_without_any_backend_fails_fast() {
        let mut renderer = PlotRenderer::new().assume_tty(false);
        let figure = renderer.create_figure();
        assert!(renderer.show(figure).unwrap_err().is_backend_unavailable());
    }
}
