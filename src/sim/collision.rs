//! Collision detection between the runner and falling obstacles
//!
//! Obstacles only share the runner's row for part of their animation. While
//! approaching (ages 0-4) they are drawn entirely on the top row and are
//! harmless; from age 5 until they expire they overlap the bottom row.

use super::field::{Obstacle, ObstacleField};
use crate::consts::*;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    /// Whether the runner was hit
    pub hit: bool,
    /// Lane that was checked
    pub lane: usize,
    /// Age of the obstacle in that lane (if any)
    pub age: Option<u8>,
}

impl CollisionResult {
    pub fn miss(lane: usize) -> Self {
        Self {
            hit: false,
            lane,
            age: None,
        }
    }
}

/// Whether an obstacle of this age overlaps the runner's row
#[inline]
pub fn is_lethal(age: u8) -> bool {
    age >= LETHAL_FROM_AGE && age < OBSTACLE_LIFETIME
}

/// Whether `obstacle` hits a runner standing in `player_lane`
pub fn is_hit(player_lane: usize, obstacle: Option<&Obstacle>) -> bool {
    obstacle.is_some_and(|o| o.lane() == player_lane && is_lethal(o.age()))
}

/// Check the runner's lane against the field
pub fn detect(field: &ObstacleField, player_lane: usize) -> CollisionResult {
    match field.occupant_at(player_lane) {
        Some(obstacle) => CollisionResult {
            hit: is_hit(player_lane, Some(obstacle)),
            lane: player_lane,
            age: Some(obstacle.age()),
        },
        None => CollisionResult::miss(player_lane),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lethal_window_sweep() {
        let lethal: Vec<u8> = (0..=u8::MAX).filter(|&age| is_lethal(age)).collect();
        assert_eq!(lethal, vec![5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_other_lane_never_hits() {
        let obstacle = Obstacle::with_age(4, 7);
        assert!(is_hit(4, Some(&obstacle)));
        assert!(!is_hit(3, Some(&obstacle)));
        assert!(!is_hit(3, None));
    }

    #[test]
    fn test_hit_reported_exactly_in_window_across_advances() {
        let mut field = ObstacleField::new();
        field.insert(Obstacle::new(3));

        assert!(!detect(&field, 3).hit);
        for _ in 0..OBSTACLE_LIFETIME {
            field.advance();
            let result = detect(&field, 3);
            match result.age {
                Some(age) => assert_eq!(result.hit, (5..=10).contains(&age), "age {age}"),
                None => assert!(!result.hit),
            }
        }
        // Expired after 11 advances
        assert_eq!(detect(&field, 3), CollisionResult::miss(3));
    }
}
