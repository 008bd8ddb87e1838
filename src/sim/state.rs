//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lanes::{self, LANE_COUNT, LaneShift};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title card before the countdown starts
    Intro,
    /// 3 / 2 / 1 / Go countdown
    Countdown,
    /// Active gameplay
    Running,
    /// Run ended (terminal; the state is frozen)
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Collided with a carbon dioxide obstacle
    CarbonDioxide,
    /// Went too long without collecting oxygen
    OxygenStarved,
}

impl GameOverReason {
    /// Player-facing message shown on the game-over screen
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::CarbonDioxide => "You touched carbon dioxide!",
            GameOverReason::OxygenStarved => "You ran out of oxygen!",
        }
    }
}

/// Terminal result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub score: u32,
    pub reason: GameOverReason,
}

/// Kind of falling obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Beneficial: +1 score, resets the survival timer
    Oxygen,
    /// Fatal on contact
    CarbonDioxide,
}

/// A falling circular obstacle
///
/// Spawned above the visible playfield (`y = -radius`) on one of the three
/// lane centers; x never changes after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub kind: ObstacleKind,
}

/// The player sprite
///
/// Only the lane index ever changes; y and the hitbox are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Current lane index, always in `[0, LANE_COUNT)`
    lane: usize,
}

impl Default for Player {
    fn default() -> Self {
        // Start in the middle lane
        Self { lane: 1 }
    }
}

impl Player {
    /// Current lane index
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Apply a lane-change intent (clamped, no wraparound)
    pub fn shift(&mut self, shift: LaneShift) {
        self.lane = lanes::shift_lane(self.lane, shift);
    }

    /// Center of the player sprite in playfield coordinates
    pub fn center(&self) -> Vec2 {
        let lanes = lanes::lane_centers(SCREEN_WIDTH);
        Vec2::new(lanes[self.lane], PLAYER_TOP_Y + PLAYER_HEIGHT / 2.0)
    }
}

/// Difficulty scaling rule
///
/// Two policies survive from successive drafts of the game; both are kept
/// as swappable strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPolicy {
    /// Speeds recomputed every tick as a pure function of score:
    /// `game_speed = 1 + score/5`, `obstacle_speed = base + score/10`
    ScoreThreshold,
    /// Speeds bumped by one each time score crosses `10 * game_speed`
    #[default]
    StepIncrement,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Per-run RNG, advanced only by the spawner
    pub rng: Pcg32,
    /// Difficulty scaling rule for this run
    pub policy: DifficultyPolicy,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks spent in the current phase
    pub phase_ticks: u32,
    /// Simulation tick counter (whole run)
    pub time_ticks: u64,
    /// Oxygen pickups this run
    pub score: u32,
    /// Speed multiplier, starts at 1 and never decreases
    pub game_speed: u32,
    /// Fall speed in pixels per tick, scaled by `game_speed`
    pub obstacle_speed: f32,
    /// Player sprite
    pub player: Player,
    /// Live obstacles; insertion order is irrelevant
    pub obstacles: Vec<Obstacle>,
    /// Tick of the most recent periodic spawn
    pub last_spawn_tick: u64,
    /// Becomes true on the first oxygen pickup and never reverts
    pub oxygen_timer_active: bool,
    /// Tick of the most recent oxygen pickup
    pub last_oxygen_tick: u64,
    /// Tick of the most recent timer-driven auto-spawn
    pub last_aid_spawn_tick: u64,
    /// Set exactly once, when entering GameOver
    pub outcome: Option<RunOutcome>,
}

impl GameState {
    /// Create a new run with the given seed and the default difficulty policy
    pub fn new(seed: u64) -> Self {
        Self::with_policy(seed, DifficultyPolicy::default())
    }

    /// Create a new run with an explicit difficulty policy
    pub fn with_policy(seed: u64, policy: DifficultyPolicy) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            policy,
            phase: GamePhase::Intro,
            phase_ticks: 0,
            time_ticks: 0,
            score: 0,
            game_speed: 1,
            obstacle_speed: BASE_OBSTACLE_SPEED,
            player: Player::default(),
            obstacles: Vec::new(),
            last_spawn_tick: 0,
            oxygen_timer_active: false,
            last_oxygen_tick: 0,
            last_aid_spawn_tick: 0,
            outcome: None,
        }
    }

    /// Seconds elapsed since run start
    pub fn now_secs(&self) -> f32 {
        self.time_ticks as f32 * SIM_DT
    }

    /// Countdown label for the current tick, if in the Countdown phase
    pub fn countdown_label(&self) -> Option<&'static str> {
        if self.phase != GamePhase::Countdown {
            return None;
        }
        match (self.phase_ticks as f32 * SIM_DT) as u32 {
            0 => Some("3"),
            1 => Some("2"),
            2 => Some("1"),
            _ => Some("Go"),
        }
    }

    /// Render-facing snapshot of the current frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            score: self.score,
            game_speed: self.game_speed,
            player: self.player.center(),
            obstacles: self
                .obstacles
                .iter()
                .map(|ob| (ob.pos, ob.kind))
                .collect(),
            outcome: self.outcome,
        }
    }
}

/// Per-tick snapshot consumed by a presentation layer
///
/// The sim never draws; whatever frontend exists reads one of these per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub game_speed: u32,
    /// Player sprite center
    pub player: Vec2,
    /// Live obstacle centers and kinds
    pub obstacles: Vec<(Vec2, ObstacleKind)>,
    /// Present once the run has ended
    pub outcome: Option<RunOutcome>,
}

/// Compile-time check that the lane count matches the player invariant
const _: () = assert!(LANE_COUNT == 3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Intro);
        assert_eq!(state.score, 0);
        assert_eq!(state.game_speed, 1);
        assert!(!state.oxygen_timer_active);
        assert!(state.obstacles.is_empty());
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_player_starts_center_lane() {
        let player = Player::default();
        assert_eq!(player.lane(), 1);
        assert_eq!(player.center(), Vec2::new(200.0, 550.0));
    }

    #[test]
    fn test_player_shift_clamps() {
        let mut player = Player::default();
        player.shift(LaneShift::Left);
        assert_eq!(player.lane(), 0);
        player.shift(LaneShift::Left);
        assert_eq!(player.lane(), 0);
        player.shift(LaneShift::Right);
        player.shift(LaneShift::Right);
        assert_eq!(player.lane(), 2);
        player.shift(LaneShift::Right);
        assert_eq!(player.lane(), 2);
    }

    #[test]
    fn test_game_over_messages() {
        assert_eq!(
            GameOverReason::CarbonDioxide.message(),
            "You touched carbon dioxide!"
        );
        assert_eq!(
            GameOverReason::OxygenStarved.message(),
            "You ran out of oxygen!"
        );
    }

    #[test]
    fn test_state_json_round_trip() {
        let state = GameState::new(7);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.phase, state.phase);
        assert_eq!(back.player.lane(), state.player.lane());
    }
}
