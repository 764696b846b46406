//! Screen layouts for each phase

use super::DisplaySink;
use super::sprites::{Sprite, obstacle_frame};
use crate::consts::PLAYER_ROW;
use crate::sim::field::ObstacleField;

pub const TITLE: &str = "==SWEET RUNNER==";
pub const PROMPT: &str = "  TWIST TO PLAY ";
pub const DEATH: &str = "    YOU DIED    ";

fn draw_sprite<D: DisplaySink + ?Sized>(display: &mut D, row: usize, col: usize, sprite: Option<Sprite>) {
    if let Some(sprite) = sprite {
        display.move_cursor(row, col);
        display.write(sprite.glyph().encode_utf8(&mut [0; 4]));
    }
}

/// Title screen shown while waiting for a start gesture
pub fn draw_attract<D: DisplaySink + ?Sized>(display: &mut D) {
    display.clear();
    display.move_cursor(0, 0);
    display.write(TITLE);
    display.move_cursor(1, 0);
    display.write(PROMPT);
}

/// One frame of play: the runner, then every obstacle on top
///
/// An obstacle's bottom sprite overwrites the runner when they share a cell.
pub fn draw_playfield<D: DisplaySink + ?Sized>(display: &mut D, player_lane: usize, field: &ObstacleField) {
    display.clear();
    draw_sprite(display, PLAYER_ROW, player_lane, Some(Sprite::Runner));

    for obstacle in field.iter() {
        if let Some((top, bottom)) = obstacle_frame(obstacle.age()) {
            draw_sprite(display, 0, obstacle.lane(), top);
            draw_sprite(display, 1, obstacle.lane(), bottom);
        }
    }
}

/// Score line: the tick count, right-aligned in nine columns
pub fn score_line(score: u32) -> String {
    format!("SCORE: {score:>9}")
}

pub fn draw_game_over<D: DisplaySink + ?Sized>(display: &mut D, score: u32) {
    display.clear();
    display.move_cursor(0, 0);
    display.write(DEATH);
    display.move_cursor(1, 0);
    display.write(&score_line(score));
}
