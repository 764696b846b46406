//! Fixed timestep simulation tick
//!
//! Advances one round by a single step. Rendering and sound are left to the
//! caller, which reacts to the returned [`TickOutcome`].

use super::collision;
use super::state::{GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Runner's lane from the most recent knob sample
    pub player_lane: usize,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing moved
    Skipped,
    /// Round continues
    Survived { spawned: usize, expired: usize },
    /// Runner was hit; the phase is now `GameOver`
    Hit { lane: usize, age: u8, score: u32 },
}

/// Advance the game state by one tick
///
/// Order within a tick: difficulty step and spawns, then aging, then the
/// collision check against the aged field.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if state.phase != GamePhase::Playing {
        return TickOutcome::Skipped;
    }

    state.player_lane = input.player_lane.min(state.field.columns() - 1);

    let requested = state.difficulty.advance();
    let spawned = if requested > 0 {
        state.field.spawn(requested as usize, &mut state.rng)
    } else {
        0
    };
    if spawned > 0 {
        log::debug!(
            "Tick {}: spawned {} of {} requested",
            state.difficulty.frame_number,
            spawned,
            requested
        );
    }

    let expired = state.field.advance();

    let result = collision::detect(&state.field, state.player_lane);
    if result.hit {
        let score = state.score();
        state.phase = GamePhase::GameOver;
        state.last_score = Some(score);
        return TickOutcome::Hit {
            lane: result.lane,
            age: result.age.unwrap_or_default(),
            score,
        };
    }

    TickOutcome::Survived { spawned, expired }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::field::Obstacle;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_tick_outside_playing_is_skipped() {
        for phase in [GamePhase::Idle, GamePhase::Attract, GamePhase::GameOver] {
            let mut state = GameState::new(1);
            state.phase = phase;
            assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::Skipped);
            assert_eq!(state.score(), 0);
            assert!(state.field.is_empty());
        }
    }

    #[test]
    fn test_obstacle_in_player_lane_kills_on_first_lethal_tick() {
        let mut state = playing(12345);
        state.field.insert(Obstacle::new(3));
        let input = TickInput { player_lane: 3 };

        // Ages 1..=4 are harmless
        for _ in 0..4 {
            assert!(matches!(tick(&mut state, &input), TickOutcome::Survived { .. }));
            assert_eq!(state.phase, GamePhase::Playing);
        }

        let outcome = tick(&mut state, &input);
        assert_eq!(
            outcome,
            TickOutcome::Hit {
                lane: 3,
                age: 5,
                score: 5
            }
        );
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.last_score, Some(5));

        // No further progress once the round is over
        assert_eq!(tick(&mut state, &input), TickOutcome::Skipped);
    }

    #[test]
    fn test_dodging_survives_the_whole_animation() {
        let mut state = playing(7);
        state.field.insert(Obstacle::new(3));

        for frame in 0..OBSTACLE_LIFETIME {
            // Step out of lane 3 while it is lethal
            let lane = if frame >= 3 { 4 } else { 3 };
            state.field.reset();
            state.field.insert(Obstacle::with_age(3, frame));
            let outcome = tick(&mut state, &TickInput { player_lane: lane });
            assert!(
                !matches!(outcome, TickOutcome::Hit { .. }),
                "hit at age {}",
                frame + 1
            );
        }
    }

    #[test]
    fn test_player_lane_is_clamped_to_field() {
        let mut state = playing(1);
        tick(&mut state, &TickInput { player_lane: 99 });
        assert_eq!(state.player_lane, COLUMN_COUNT - 1);
    }

    #[test]
    fn test_spawns_follow_difficulty() {
        let mut state = playing(99);
        let input = TickInput { player_lane: 0 };

        for _ in 0..4 {
            assert_eq!(
                tick(&mut state, &input),
                TickOutcome::Survived {
                    spawned: 0,
                    expired: 0
                }
            );
        }
        assert!(state.field.is_empty());

        // Tick 5 spawns one obstacle, which has already aged once
        assert_eq!(
            tick(&mut state, &input),
            TickOutcome::Survived {
                spawned: 1,
                expired: 0
            }
        );
        let ages: Vec<u8> = state.field.iter().map(|o| o.age()).collect();
        assert_eq!(ages, vec![1]);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing(99999);
        let mut b = playing(99999);
        let lanes = [0, 5, 5, 9, 15, 15, 2, 2, 8, 8, 8, 1];

        for i in 0..120 {
            let input = TickInput {
                player_lane: lanes[i % lanes.len()],
            };
            assert_eq!(tick(&mut a, &input), tick(&mut b, &input));
        }
        assert_eq!(a.field, b.field);
        assert_eq!(a.difficulty, b.difficulty);
    }
}
