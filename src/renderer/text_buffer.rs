//! In-memory character display

use super::DisplaySink;
use crate::consts::{COLUMN_COUNT, ROW_COUNT};

/// A character grid that behaves like an LCD
///
/// Text past the end of a row is dropped, as on the real controller when
/// the cursor runs off a line. Any change sets the dirty flag so a front-end
/// knows to repaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    cells: Vec<Vec<char>>,
    cursor: (usize, usize),
    dirty: bool,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(COLUMN_COUNT, ROW_COUNT)
    }
}

impl TextBuffer {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![' '; columns]; rows],
            cursor: (0, 0),
            dirty: true,
        }
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Contents of one row (spaces included)
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| cells.iter().collect())
            .unwrap_or_default()
    }

    /// All rows joined with newlines
    pub fn text(&self) -> String {
        (0..self.rows())
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Return and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl DisplaySink for TextBuffer {
    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.cursor = (0, 0);
        self.dirty = true;
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }

    fn write(&mut self, text: &str) {
        let (row, mut col) = self.cursor;
        if let Some(cells) = self.cells.get_mut(row) {
            for ch in text.chars() {
                if let Some(cell) = cells.get_mut(col) {
                    *cell = ch;
                }
                col += 1;
            }
            self.dirty = true;
        }
        self.cursor = (row, col);
    }
}
