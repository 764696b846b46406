//! Difficulty progression
//!
//! Every `level_period` ticks the gap between spawns shrinks by one tick.
//! Once a spawn happens every tick, each spawn drops one more obstacle
//! instead. There is no ceiling.

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyState {
    /// Ticks between spawn attempts (>= 1)
    pub block_period: u32,
    /// Obstacles requested per spawn attempt (>= 1)
    pub blocks_per_spawn: u32,
    /// Ticks between difficulty steps
    pub level_period: u32,
    /// Ticks since the round started; doubles as the score
    pub frame_number: u32,
}

impl Default for DifficultyState {
    fn default() -> Self {
        Self {
            block_period: INITIAL_BLOCK_PERIOD,
            blocks_per_spawn: INITIAL_BLOCKS_PER_SPAWN,
            level_period: LEVEL_PERIOD,
            frame_number: 0,
        }
    }
}

impl DifficultyState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one more tick and apply it; returns the spawn request
    pub fn advance(&mut self) -> u32 {
        self.frame_number += 1;
        self.on_tick(self.frame_number)
    }

    /// Apply the schedule for `frame_number`
    ///
    /// Returns how many obstacles to spawn this tick (0 when not a spawn tick).
    /// The spawn decision uses the period in force before any level step.
    pub fn on_tick(&mut self, frame_number: u32) -> u32 {
        let spawn = if frame_number % self.block_period == 0 {
            self.blocks_per_spawn
        } else {
            0
        };

        if frame_number % self.level_period == 0 {
            if self.block_period == 1 {
                self.blocks_per_spawn += 1;
            } else {
                self.block_period -= 1;
            }
            log::debug!(
                "Level up at tick {}: period={} per_spawn={}",
                frame_number,
                self.block_period,
                self.blocks_per_spawn
            );
        }

        spawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ticks: u32) -> DifficultyState {
        let mut state = DifficultyState::default();
        for _ in 0..ticks {
            state.advance();
        }
        state
    }

    #[test]
    fn test_schedule_checkpoints() {
        let expected = [
            (39, 5, 1),
            (40, 4, 1),
            (80, 3, 1),
            (120, 2, 1),
            (160, 1, 1),
            (199, 1, 1),
            (200, 1, 2),
            (240, 1, 3),
        ];
        for (ticks, period, per_spawn) in expected {
            let state = run(ticks);
            assert_eq!(state.block_period, period, "period after {ticks} ticks");
            assert_eq!(state.blocks_per_spawn, per_spawn, "per-spawn after {ticks} ticks");
            assert_eq!(state.frame_number, ticks);
        }
    }

    #[test]
    fn test_spawn_requests_follow_period() {
        let mut state = DifficultyState::default();
        let requests: Vec<u32> = (0..10).map(|_| state.advance()).collect();
        assert_eq!(requests, vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_level_tick_spawns_with_old_period() {
        // Tick 40 is a multiple of 5, so it spawns before the period drops to 4
        let mut state = run(39);
        assert_eq!(state.advance(), 1);
        assert_eq!(state.block_period, 4);
    }

    #[test]
    fn test_saturated_schedule_spawns_every_tick() {
        let mut state = run(200);
        assert_eq!(state.advance(), 2);
        assert_eq!(state.advance(), 2);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = run(321);
        state.reset();
        assert_eq!(state, DifficultyState::default());
        assert_eq!(
            (state.block_period, state.blocks_per_spawn, state.frame_number),
            (5, 1, 0)
        );
    }
}
