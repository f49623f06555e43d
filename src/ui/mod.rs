//! User interface rendering.

mod grid;
mod keymap_bar;
mod status_bar;
mod theme;
mod view;

use crate::viewer::ViewerState;
use ratatui::Frame;

pub use grid::GridView;
pub use theme::{Theme, ThemeColors};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, state: &ViewerState) {
    view::draw_view(f, state);
}
