//! Obstacle field
//!
//! One optional obstacle slot per lane. Obstacles drop down the display as
//! they age and disappear once their animation runs out.

use rand::Rng;

use crate::ConfigError;
use crate::consts::*;

/// A falling block pinned to one lane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    lane: usize,
    age: u8,
}

impl Obstacle {
    /// Fresh obstacle (age 0) in `lane`
    pub fn new(lane: usize) -> Self {
        Self { lane, age: 0 }
    }

    /// Obstacle at an explicit age (scripted scenarios)
    pub fn with_age(lane: usize, age: u8) -> Self {
        Self { lane, age }
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    /// Age by one tick; returns true once the animation has run out
    fn step(&mut self) -> bool {
        self.age = self.age.saturating_add(1);
        self.age >= OBSTACLE_LIFETIME
    }
}

/// All active obstacles, at most one per lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleField {
    lanes: Vec<Option<Obstacle>>,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    /// Field spanning the display width
    pub fn new() -> Self {
        Self {
            lanes: vec![None; COLUMN_COUNT],
        }
    }

    /// Field with a custom width; zero columns is rejected up front
    pub fn with_columns(columns: usize) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(Self {
            lanes: vec![None; columns],
        })
    }

    pub fn columns(&self) -> usize {
        self.lanes.len()
    }

    /// Lanes without an obstacle, in ascending order
    pub fn free_lanes(&self) -> Vec<usize> {
        self.lanes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(lane, _)| lane)
            .collect()
    }

    /// Drop up to `count` fresh obstacles into distinct free lanes
    ///
    /// Lanes are drawn uniformly without replacement. Returns how many were
    /// placed; a full field places nothing.
    pub fn spawn<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let free = self.free_lanes();
        if free.is_empty() || count == 0 {
            return 0;
        }

        let amount = count.min(free.len());
        for index in rand::seq::index::sample(rng, free.len(), amount) {
            let lane = free[index];
            self.lanes[lane] = Some(Obstacle::new(lane));
        }
        amount
    }

    /// Place a specific obstacle; refuses to overwrite an occupied lane
    pub fn insert(&mut self, obstacle: Obstacle) -> bool {
        let Some(slot) = self.lanes.get_mut(obstacle.lane) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(obstacle);
        true
    }

    /// Age every obstacle by one tick, removing expired ones
    ///
    /// Returns the number removed.
    pub fn advance(&mut self) -> usize {
        let mut expired = 0;
        for slot in &mut self.lanes {
            if slot.as_mut().is_some_and(Obstacle::step) {
                *slot = None;
                expired += 1;
            }
        }
        expired
    }

    pub fn occupant_at(&self, lane: usize) -> Option<&Obstacle> {
        self.lanes.get(lane).and_then(Option::as_ref)
    }

    /// Active obstacles in lane order
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.lanes.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.lanes.iter().all(Option::is_some)
    }

    pub fn reset(&mut self) {
        self.lanes.fill(None);
    }
}
