//! Color themes for the UI.

use plotters::style::RGBColor;
use ratatui::style::Color;

use crate::config::RenderConfig;
use crate::render::PlotStyle;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Grid and axis line color.
    pub grid: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                grid: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                grid: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Chart style matching this palette.
    pub fn plot_style(&self, config: &RenderConfig) -> PlotStyle {
        PlotStyle::terminal(rgb(self.bg), rgb(self.heading), rgb(self.grid), config)
    }
}

fn rgb(color: Color) -> RGBColor {
    match color {
        Color::Rgb(r, g, b) => RGBColor(r, g, b),
        Color::Black => RGBColor(0, 0, 0),
        _ => RGBColor(255, 255, 255),
    }
}
