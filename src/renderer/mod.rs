//! Character display rendering
//!
//! The game draws onto a 16x2 character display through [`DisplaySink`]. All
//! layout is computed here; a sink only positions a cursor and prints text.

pub mod screen;
pub mod sprites;
pub mod text_buffer;

pub use screen::{draw_attract, draw_game_over, draw_playfield};
pub use sprites::{OBSTACLE_FRAMES, Sprite, obstacle_frame};
pub use text_buffer::TextBuffer;

/// Push-only character display
pub trait DisplaySink {
    fn clear(&mut self);
    /// Move the write cursor; `row` in 0..2, `col` in 0..16
    fn move_cursor(&mut self, row: usize, col: usize);
    fn write(&mut self, text: &str);
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        (**self).move_cursor(row, col);
    }

    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
}
