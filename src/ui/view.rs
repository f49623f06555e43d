//! Plot view rendering.

use super::keymap_bar::draw_keymap;
use super::status_bar::draw_status;
use super::{GridView, ThemeColors};
use crate::render::render_to_grid;
use crate::viewer::ViewerState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the plot view.
pub(super) fn draw_view(f: &mut Frame<'_>, state: &ViewerState) {
    let colors = ThemeColors::from_theme(&state.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    draw_plot(f, state, chunks[0], &colors);
    draw_status(f, chunks[1], &state.status, &colors);
    draw_keymap(f, chunks[2], &colors);
}

fn draw_plot(f: &mut Frame<'_>, state: &ViewerState, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Magview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let style = colors.plot_style(&state.config().render);
    match render_to_grid(&state.figure, inner.width, inner.height, &style) {
        Ok(grid) => f.render_widget(GridView::new(&grid), inner),
        Err(e) => draw_error(f, inner, &e.to_string(), colors),
    }
}

fn draw_error(f: &mut Frame<'_>, area: Rect, error: &str, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            "Unable to draw plot",
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), Style::default().fg(colors.text))),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
