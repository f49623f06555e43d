//! Interactive terminal view.
//!
//! Holds the figure being shown, applies key presses to its view projection
//! and runs the blocking event loop until the user quits.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

use crate::config::Config;
use crate::error::Result;
use crate::figure::{Figure, ViewProjection};
use crate::render::svg;
use crate::ui::{self, Theme};

/// State of the interactive view.
#[derive(Debug)]
pub struct ViewerState {
    /// Figure being shown.
    pub figure: Figure,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Set once the user asked to close the view.
    pub should_quit: bool,
    config: Config,
}

impl ViewerState {
    /// Create a view of `figure`.
    pub fn new(figure: Figure, config: Config) -> Self {
        let status = figure
            .axes()
            .map(|axes| axes.view().describe())
            .unwrap_or_else(|| "Ready".to_string());

        Self {
            figure,
            theme: Theme::default(),
            status,
            should_quit: false,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the current view projection, if the figure has axes.
    pub fn view(&self) -> Option<ViewProjection> {
        self.figure.axes().map(|axes| axes.view())
    }

    /// Rotate by a number of rotation steps around each axis.
    pub fn rotate(&mut self, yaw_steps: f64, pitch_steps: f64) {
        let step = self.config.viewer.rotation_step;
        self.apply_delta(ViewProjection {
            yaw: yaw_steps * step,
            pitch: pitch_steps * step,
            scale: 0.0,
        });
    }

    /// Zoom by a number of zoom steps. Negative steps zoom out.
    pub fn zoom(&mut self, steps: f64) {
        self.apply_delta(ViewProjection {
            yaw: 0.0,
            pitch: 0.0,
            scale: steps * self.config.viewer.zoom_step,
        });
    }

    /// Go back to the initial view.
    pub fn reset_view(&mut self) {
        let Some(axes) = self.figure.axes_mut() else {
            return;
        };
        axes.set_view(ViewProjection::default());
        self.status = format!("View reset: {}", axes.view().describe());
    }

    fn apply_delta(&mut self, delta: ViewProjection) {
        let Some(axes) = self.figure.axes_mut() else {
            self.status = "Nothing to rotate".to_string();
            return;
        };
        axes.set_view(axes.view() + delta);
        self.status = axes.view().describe();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Export the current view to the configured SVG file.
    pub fn export(&mut self) {
        let path = self.config.render.svg_path.clone();
        match svg::export(&self.figure, &path, &self.config.render) {
            Ok(()) => self.status = format!("Exported to {}", path.display()),
            Err(e) => {
                tracing::warn!("Export failed: {}", e);
                self.status = format!("Export failed: {}", e);
            },
        }
    }

    /// Ask the view to close.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.quit(),

            // Rotate
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.rotate(1.0, 0.0);
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.rotate(-1.0, 0.0);
            },
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                self.rotate(0.0, -1.0);
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                self.rotate(0.0, 1.0);
            },

            // Zoom
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('+'))
            | (KeyModifiers::NONE, KeyCode::Char('=')) => self.zoom(1.0),
            (KeyModifiers::NONE, KeyCode::Char('-')) => self.zoom(-1.0),

            // View
            (KeyModifiers::NONE, KeyCode::Char('r')) => self.reset_view(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('T')) => self.cycle_theme(),
            (KeyModifiers::NONE, KeyCode::Char('e')) => self.export(),

            _ => {},
        }
    }
}

/// Run the view until the user quits.
///
/// Blocks the calling thread. Every received event triggers a redraw.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, state: &mut ViewerState) -> Result<()> {
    let poll_interval = state.config.viewer.poll_interval;

    while !state.should_quit {
        terminal.draw(|f| ui::draw(f, state))?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key(key);
                }
            }
        }
    }

    tracing::info!("Viewer closed");
    Ok(())
}
