//! Game state and phases
//!
//! Everything the simulation mutates lives in one owned [`GameState`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::DifficultyState;
use super::field::ObstacleField;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Powered on, waiting out the startup delay
    Idle,
    /// Title screen, waiting for a deliberate twist of the knob
    Attract,
    /// Active round
    Playing,
    /// Score on screen, waiting to return to attract
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Lane picker for spawns
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub field: ObstacleField,
    pub difficulty: DifficultyState,
    /// Runner's lane as of the last tick
    pub player_lane: usize,
    /// Knob position captured when the attract screen appeared
    pub baseline: f32,
    /// Rounds started since power-on
    pub rounds_played: u32,
    /// Score of the most recent finished round
    pub last_score: Option<u32>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            field: ObstacleField::new(),
            difficulty: DifficultyState::default(),
            player_lane: 0,
            baseline: 0.0,
            rounds_played: 0,
            last_score: None,
        }
    }

    /// Clear obstacles and difficulty for a new round
    pub fn reset(&mut self) {
        self.field.reset();
        self.difficulty.reset();
    }

    /// Score so far (ticks survived this round)
    pub fn score(&self) -> u32 {
        self.difficulty.frame_number
    }
}
