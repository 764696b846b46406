//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only, driven by a virtual clock
//! - Seeded RNG only
//! - No rendering or platform dependencies below `machine`

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod field;
pub mod input;
pub mod machine;
pub mod state;
pub mod tick;

pub use clock::{Scheduler, TimerId};
pub use collision::{CollisionResult, detect, is_hit, is_lethal};
pub use difficulty::DifficultyState;
pub use field::{Obstacle, ObstacleField};
pub use input::{InputSampler, InputSource, LatestReading, lane_of};
pub use machine::{Event, GameStateMachine};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, tick};
