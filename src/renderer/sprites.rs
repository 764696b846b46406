//! Sprites and the obstacle animation table
//!
//! An HD44780-style controller holds eight user-defined glyphs; the game
//! uses exactly eight: one runner and seven bar heights.

use crate::consts::OBSTACLE_LIFETIME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Runner,
    /// Bar growing up from the bottom of a cell
    Rise2,
    Rise4,
    Rise6,
    Full,
    /// Bar shrinking toward the top of a cell
    Fall6,
    Fall4,
    Fall2,
}

impl Sprite {
    /// Custom character slot the glyph is uploaded to
    pub fn slot(self) -> u8 {
        match self {
            Sprite::Runner => 0,
            Sprite::Rise2 => 1,
            Sprite::Rise4 => 2,
            Sprite::Rise6 => 3,
            Sprite::Full => 4,
            Sprite::Fall6 => 5,
            Sprite::Fall4 => 6,
            Sprite::Fall2 => 7,
        }
    }

    /// Closest Unicode stand-in for terminals and tests
    pub fn glyph(self) -> char {
        match self {
            Sprite::Runner => '@',
            Sprite::Rise2 => '▂',
            Sprite::Rise4 => '▄',
            Sprite::Rise6 => '▆',
            Sprite::Full => '█',
            Sprite::Fall6 => '\u{1FB85}',
            Sprite::Fall4 => '▀',
            Sprite::Fall2 => '▔',
        }
    }
}

/// (top row, bottom row) sprite for each obstacle age
///
/// The block slides down out of the top cell and into the bottom one; from
/// age 5 on it shares the runner's row.
pub const OBSTACLE_FRAMES: [(Option<Sprite>, Option<Sprite>); OBSTACLE_LIFETIME as usize] = [
    (Some(Sprite::Rise2), None),
    (Some(Sprite::Rise4), None),
    (Some(Sprite::Rise6), None),
    (Some(Sprite::Full), None),
    (Some(Sprite::Fall6), Some(Sprite::Rise2)),
    (Some(Sprite::Fall4), Some(Sprite::Rise4)),
    (Some(Sprite::Fall2), Some(Sprite::Rise6)),
    (None, Some(Sprite::Full)),
    (None, Some(Sprite::Fall6)),
    (None, Some(Sprite::Fall4)),
    (None, Some(Sprite::Fall2)),
];

/// Frame for an obstacle of the given age (None once expired)
pub fn obstacle_frame(age: u8) -> Option<(Option<Sprite>, Option<Sprite>)> {
    OBSTACLE_FRAMES.get(age as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::is_lethal;

    #[test]
    fn test_lethal_frames_touch_bottom_row() {
        for age in 0..OBSTACLE_LIFETIME {
            let (_, bottom) = obstacle_frame(age).unwrap();
            // The window starts one frame after the bar first peeks into the
            // runner's cell
            if is_lethal(age) {
                assert!(bottom.is_some(), "age {age}");
            }
            if age < 4 {
                assert!(bottom.is_none(), "age {age}");
            }
        }
        assert_eq!(obstacle_frame(OBSTACLE_LIFETIME), None);
    }

    #[test]
    fn test_slots_are_distinct() {
        let all = [
            Sprite::Runner,
            Sprite::Rise2,
            Sprite::Rise4,
            Sprite::Rise6,
            Sprite::Full,
            Sprite::Fall6,
            Sprite::Fall4,
            Sprite::Fall2,
        ];
        let mut slots: Vec<u8> = all.iter().map(|s| s.slot()).collect();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), 8);

        // Every frame must look different on a terminal too
        let mut glyphs: Vec<char> = all.iter().map(|s| s.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 8);
    }
}
