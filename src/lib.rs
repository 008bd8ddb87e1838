//! Oxygen Run - a lane-dodging arcade game
//!
//! The player drifts between three vertical lanes while circular obstacles
//! fall from the top of the playfield: oxygen bubbles score a point, carbon
//! dioxide ends the run, and going too long without oxygen ends it too.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, collisions, game state)
//! - `platform`: Fixed-rate clock for the native loop
//! - `settings`: Run configuration with JSON persistence

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (the original runs at 30 Hz)
    pub const TICK_HZ: u32 = 30;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player sprite dimensions
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Top edge of the player sprite (fixed; only the lane changes)
    pub const PLAYER_TOP_Y: f32 = SCREEN_HEIGHT - PLAYER_HEIGHT - 20.0;

    /// Falling obstacle radius
    pub const OBSTACLE_RADIUS: f32 = 20.0;
    /// Base fall speed in pixels per tick, before difficulty scaling
    pub const BASE_OBSTACLE_SPEED: f32 = 5.0;
    /// Seconds between periodic spawns (divided by game speed)
    pub const SPAWN_INTERVAL: f32 = 1.5;

    /// Seconds the player survives without an oxygen pickup
    pub const OXYGEN_LIFESPAN: f32 = 5.0;
    /// Seconds between timer-driven auto-spawns, measured from the last pickup
    pub const OXYGEN_SPAWN_INTERVAL: f32 = 2.0;

    /// Intro card duration in seconds
    pub const INTRO_DURATION: f32 = 2.0;
    /// Countdown duration in seconds (3 / 2 / 1 / Go, one per second)
    pub const COUNTDOWN_DURATION: f32 = 4.0;
}
