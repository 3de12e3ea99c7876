//! Cell-grid rasterization of the pixel-space simulation.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Assumed pixel width of one terminal cell.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Assumed pixel height of one terminal cell.
///
/// Cells are roughly twice as tall as they are wide, so distances computed
/// in pixel space stay circular on screen.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// A grid of styled glyphs accumulated over one frame.
///
/// Starting from an empty grid every frame is the clear step; whatever is
/// plotted last into a cell wins.
#[derive(Debug)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<(char, Color)>>,
}

impl CellGrid {
    /// Create an empty grid with the given cell dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Plot a glyph at a pixel position. Positions outside the grid are
    /// ignored.
    pub fn plot_px(&mut self, x: f32, y: f32, ch: char, color: Color) {
        let col = (x / CELL_WIDTH_PX).floor() as i64;
        let row = (y / CELL_HEIGHT_PX).floor() as i64;
        self.plot(col, row, ch, color);
    }

    fn plot(&mut self, col: i64, row: i64, ch: char, color: Color) {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return;
        }
        self.cells[row as usize * self.width as usize + col as usize] = Some((ch, color));
    }

    /// Stamp a straight segment between two pixel positions.
    ///
    /// `style` receives the interpolation parameter in [0, 1] measured from
    /// the segment start, so strokes can fade along their length.
    pub fn stroke_px(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        style: impl Fn(f32) -> (char, Color),
    ) {
        let (c0, r0) = (from.0 / CELL_WIDTH_PX, from.1 / CELL_HEIGHT_PX);
        let (c1, r1) = (to.0 / CELL_WIDTH_PX, to.1 / CELL_HEIGHT_PX);

        // One sample per cell step along the longer axis.
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let col = (c0 + (c1 - c0) * t).floor() as i64;
            let row = (r0 + (r1 - r0) * t).floor() as i64;
            let (ch, color) = style(t);
            self.plot(col, row, ch, color);
        }
    }

    /// Glyph currently plotted at a cell, if any.
    pub fn cell(&self, col: u16, row: u16) -> Option<(char, Color)> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[row as usize * self.width as usize + col as usize]
    }

    /// Consume the grid into renderable lines.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|col| {
                        match self.cells[row as usize * self.width as usize + col as usize] {
                            Some((ch, color)) => {
                                Span::styled(ch.to_string(), Style::new().fg(color))
                            }
                            None => Span::raw(" "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
