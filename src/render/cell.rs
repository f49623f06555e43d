//! Terminal cell raster for `plotters`.
//!
//! Every cell of a [`CellGrid`] covers 2x4 backend pixels drawn as braille
//! dots. Text is kept as runs of characters so it stays readable at terminal
//! resolution.

use std::convert::Infallible;

use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
};
use unicode_width::UnicodeWidthStr;

/// Backend pixels per cell, horizontally.
pub const CELL_PIXEL_WIDTH: i32 = 2;
/// Backend pixels per cell, vertically.
pub const CELL_PIXEL_HEIGHT: i32 = 4;

const BRAILLE_BASE: u32 = 0x2800;

// Indexed by [y][x] within a cell.
const BRAILLE_DOTS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// RGB triple.
pub type Rgb = (u8, u8, u8);

/// One terminal cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCell {
    /// Braille dot bits.
    pub dots: u8,
    /// Colour of the most recent dot.
    pub fg: Option<Rgb>,
    /// Fill colour.
    pub bg: Option<Rgb>,
}

impl GridCell {
    /// Character for the dots in this cell.
    pub fn glyph(&self) -> char {
        if self.dots == 0 {
            return ' ';
        }
        char::from_u32(BRAILLE_BASE + u32::from(self.dots)).unwrap_or(' ')
    }
}

/// A piece of text placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Leftmost column.
    pub col: u16,
    /// Row.
    pub row: u16,
    /// The text, a single line.
    pub text: String,
    /// Text colour.
    pub color: Rgb,
}

/// A rendered frame at terminal-cell resolution.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cols: u16,
    rows: u16,
    cells: Vec<GridCell>,
    texts: Vec<TextRun>,
    markers: usize,
}

impl CellGrid {
    /// Create a blank grid.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![GridCell::default(); usize::from(cols) * usize::from(rows)],
            texts: Vec::new(),
            markers: 0,
        }
    }

    /// Width in cells.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Height in cells.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get a cell.
    pub fn cell(&self, col: u16, row: u16) -> Option<&GridCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.cols) + usize::from(col))
    }

    fn cell_at_mut(&mut self, col: i32, row: i32) -> Option<&mut GridCell> {
        if col < 0 || row < 0 || col >= i32::from(self.cols) || row >= i32::from(self.rows) {
            return None;
        }
        let idx = row as usize * usize::from(self.cols) + col as usize;
        self.cells.get_mut(idx)
    }

    /// Text runs in drawing order.
    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    /// Number of text runs equal to `text`.
    pub fn text_count(&self, text: &str) -> usize {
        self.texts.iter().filter(|run| run.text == text).count()
    }

    /// Whether any text run equals `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.text_count(text) > 0
    }

    /// Number of point markers drawn.
    pub fn marker_count(&self) -> usize {
        self.markers
    }

    /// Number of braille dots set.
    pub fn dot_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.dots.count_ones() as usize)
            .sum()
    }

    /// Plain-text rendering, one string per row.
    pub fn lines(&self) -> Vec<String> {
        let mut rows: Vec<Vec<char>> = (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.cell(col, row).map_or(' ', GridCell::glyph))
                    .collect()
            })
            .collect();

        for run in &self.texts {
            let Some(line) = rows.get_mut(usize::from(run.row)) else {
                continue;
            };
            for (offset, ch) in run.text.chars().enumerate() {
                if let Some(slot) = line.get_mut(usize::from(run.col) + offset) {
                    *slot = ch;
                }
            }
        }

        rows.into_iter().map(|line| line.into_iter().collect()).collect()
    }

    fn set_dot(&mut self, (x, y): BackendCoord, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let bit = BRAILLE_DOTS[(y % CELL_PIXEL_HEIGHT) as usize][(x % CELL_PIXEL_WIDTH) as usize];
        if let Some(cell) = self.cell_at_mut(x / CELL_PIXEL_WIDTH, y / CELL_PIXEL_HEIGHT) {
            cell.dots |= bit;
            cell.fg = Some(color);
        }
    }

    fn fill_cells(&mut self, upper_left: BackendCoord, bottom_right: BackendCoord, color: Rgb) {
        let (col0, row0) = to_cell(upper_left);
        let (col1, row1) = to_cell(bottom_right);
        for row in row0.max(0)..=row1 {
            for col in col0.max(0)..=col1 {
                if let Some(cell) = self.cell_at_mut(col, row) {
                    cell.dots = 0;
                    cell.bg = Some(color);
                }
            }
        }
    }

    // Text that would fall off the grid is nudged back inside.
    fn put_text(&mut self, col: i32, row: i32, text: &str, color: Rgb) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        for (line_no, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let width = line.width() as i32;
            let max_col = (i32::from(self.cols) - width).max(0);
            let col = col.clamp(0, max_col);
            let row = (row + line_no as i32).clamp(0, i32::from(self.rows) - 1);
            self.texts.push(TextRun {
                col: col as u16,
                row: row as u16,
                text: line.to_string(),
                color,
            });
        }
    }
}

fn to_cell((x, y): BackendCoord) -> (i32, i32) {
    (
        x.div_euclid(CELL_PIXEL_WIDTH),
        y.div_euclid(CELL_PIXEL_HEIGHT),
    )
}

fn text_extent(text: &str) -> (u32, u32) {
    let widest = text.lines().map(|line| line.width()).max().unwrap_or(0);
    let lines = text.lines().count().max(1);
    (
        widest as u32 * CELL_PIXEL_WIDTH as u32,
        lines as u32 * CELL_PIXEL_HEIGHT as u32,
    )
}

/// `plotters` backend drawing into a [`CellGrid`].
#[derive(Debug)]
pub struct CellBackend<'a> {
    grid: &'a mut CellGrid,
}

impl<'a> CellBackend<'a> {
    /// Draw into `grid`.
    pub fn new(grid: &'a mut CellGrid) -> Self {
        Self { grid }
    }
}

impl DrawingBackend for CellBackend<'_> {
    type ErrorType = Infallible;

    fn get_size(&self) -> (u32, u32) {
        (
            u32::from(self.grid.cols) * CELL_PIXEL_WIDTH as u32,
            u32::from(self.grid.rows) * CELL_PIXEL_HEIGHT as u32,
        )
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Ok(())
    }

    fn draw_pixel(
        &mut self,
        point: BackendCoord,
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        if color.alpha > 0.0 {
            self.grid.set_dot(point, color.rgb);
        }
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let color = style.color();
        if color.alpha <= 0.0 {
            return Ok(());
        }

        if fill {
            self.grid.fill_cells(upper_left, bottom_right, color.rgb);
            return Ok(());
        }

        let (x0, y0) = upper_left;
        let (x1, y1) = bottom_right;
        self.draw_path([(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)], style)
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        _radius: u32,
        style: &S,
        _fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        // A circle is a point marker; at braille resolution it is one dot.
        self.grid.markers += 1;
        self.draw_pixel(center, style.color())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let (width, height) = text_extent(text);
        let (width, height) = (width as i32, height as i32);
        let Pos { h_pos, v_pos } = style.anchor();

        let left = match h_pos {
            HPos::Left => pos.0,
            HPos::Center => pos.0 - width / 2,
            HPos::Right => pos.0 - width,
        };
        let top = match v_pos {
            VPos::Top => pos.1,
            VPos::Center => pos.1 - height / 2,
            VPos::Bottom => pos.1 - height,
        };

        let (col, row) = to_cell((left, top));
        self.grid.put_text(col, row, text, style.color().rgb);
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        _style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
        Ok(text_extent(text))
    }
}
