//! Headless text canvas
//!
//! Downsamples the view into a grid of characters, one cell per
//! `cell_size` x `cell_size` block of pixels. Used by the demo binary and
//! handy when eyeballing a scene in logs.

use super::{Brush, Canvas};
use crate::sim::button::ButtonState;
use crate::sim::geometry::Rect;

const BACKGROUND: char = ' ';

pub struct AsciiCanvas {
    width: i32,
    height: i32,
    cell_size: i32,
    columns: usize,
    rows: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        let cell_size = cell_size.max(1);
        let columns = ((width + cell_size - 1) / cell_size).max(0) as usize;
        let rows = ((height + cell_size - 1) / cell_size).max(0) as usize;
        Self {
            width,
            height,
            cell_size,
            columns,
            rows,
            cells: vec![BACKGROUND; columns * rows],
        }
    }

    fn glyph(brush: Brush) -> char {
        match brush {
            Brush::Floor(_) => '.',
            Brush::Wall(_) => '#',
            Brush::Obstacle => '%',
            Brush::Dot => '@',
            Brush::Particle(_) => '*',
            Brush::Shimmer => '+',
            Brush::Button(ButtonState::MouseOut) => 'o',
            Brush::Button(ButtonState::MouseOverMotion) => 'm',
            Brush::Button(ButtonState::MouseDown) => 'd',
            Brush::Button(ButtonState::MouseUp) => 'u',
        }
    }

    /// Character at a cell, if inside the grid
    pub fn cell(&self, column: usize, row: usize) -> Option<char> {
        (column < self.columns && row < self.rows).then(|| self.cells[row * self.columns + column])
    }

    /// The grid as newline separated rows
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        for row in self.cells.chunks(self.columns.max(1)) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl Canvas for AsciiCanvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(BACKGROUND);
    }

    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        // Clip to the view
        let left = rect.left().max(0);
        let top = rect.top().max(0);
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        if left >= right || top >= bottom {
            return;
        }

        let glyph = Self::glyph(brush);
        let first_col = (left / self.cell_size) as usize;
        let last_col = ((right - 1) / self.cell_size) as usize;
        let first_row = (top / self.cell_size) as usize;
        let last_row = ((bottom - 1) / self.cell_size) as usize;

        for row in first_row..=last_row.min(self.rows.saturating_sub(1)) {
            for col in first_col..=last_col.min(self.columns.saturating_sub(1)) {
                self.cells[row * self.columns + col] = glyph;
            }
        }
    }
}
