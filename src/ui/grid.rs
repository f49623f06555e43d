//! Widget showing a rendered [`CellGrid`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::render::{CellGrid, Rgb};

/// Draws a cell grid at the top-left of its area.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a CellGrid,
}

impl<'a> GridView<'a> {
    /// Wrap a rendered grid.
    pub fn new(grid: &'a CellGrid) -> Self {
        Self { grid }
    }
}

fn color((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = area.width.min(self.grid.cols());
        let rows = area.height.min(self.grid.rows());

        for row in 0..rows {
            for col in 0..cols {
                let (Some(cell), Some(target)) = (
                    self.grid.cell(col, row),
                    buf.cell_mut((area.x + col, area.y + row)),
                ) else {
                    continue;
                };

                target.set_char(cell.glyph());
                if let Some(fg) = cell.fg {
                    target.set_fg(color(fg));
                }
                if let Some(bg) = cell.bg {
                    target.set_bg(color(bg));
                }
            }
        }

        // Text goes on top of the dots.
        for run in self.grid.texts() {
            if run.row >= rows || run.col >= cols {
                continue;
            }
            buf.set_stringn(
                area.x + run.col,
                area.y + run.row,
                &run.text,
                usize::from(cols - run.col),
                Style::default().fg(color(run.color)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CellBackend;
    use plotters::prelude::*;

    #[test]
    fn renders_dots_and_text() {
        let mut grid = CellGrid::new(6, 2);
        {
            let area = CellBackend::new(&mut grid).into_drawing_area();
            area.draw_pixel((0, 0), &RED).unwrap();
            area.draw_text("hi", &("sans-serif", 10).into_font().color(&BLUE), (4, 4))
                .unwrap();
        }

        let rect = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(rect);
        GridView::new(&grid).render(rect, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "⠁");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(2, 1)].symbol(), "h");
        assert_eq!(buf[(3, 1)].symbol(), "i");
        assert_eq!(buf[(3, 1)].fg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn clips_to_smaller_area() {
        let mut grid = CellGrid::new(10, 3);
        {
            let area = CellBackend::new(&mut grid).into_drawing_area();
            area.draw_text("abcdefghij", &("sans-serif", 10).into_font().color(&BLACK), (0, 0))
                .unwrap();
        }

        let rect = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(rect);
        GridView::new(&grid).render(rect, &mut buf);

        assert_eq!(buf[(3, 0)].symbol(), "d");
    }
}
