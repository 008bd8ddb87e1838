//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod lanes;
pub mod state;
pub mod tick;

pub use collision::player_hits_obstacle;
pub use lanes::{LANE_COUNT, LaneShift, lane_centers};
pub use state::{
    DifficultyPolicy, FrameSnapshot, GameOverReason, GamePhase, GameState, Obstacle, ObstacleKind,
    Player, RunOutcome,
};
pub use tick::{TickInput, tick};
