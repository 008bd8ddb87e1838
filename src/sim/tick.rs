//! Fixed timestep simulation tick
//!
//! Core game loop that advances one run deterministically. The cadence is
//! fixed at 30 Hz; speeds are expressed in pixels per tick and intervals in
//! seconds derived from the tick counter, so a run is a pure function of
//! seed and input sequence.

use glam::Vec2;
use rand::Rng;

use super::collision::player_hits_obstacle;
use super::lanes::{self, LANE_COUNT, LaneShift};
use super::state::{
    GameOverReason, GamePhase, GameState, Obstacle, ObstacleKind, RunOutcome,
};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Captured once at the top of the tick and applied atomically; the sim
/// never polls mid-tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Shift one lane toward the left edge
    pub move_left: bool,
    /// Shift one lane toward the right edge
    pub move_right: bool,
    /// Demo mode - AI plays the game
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
///
/// Once the run has ended this is a no-op; the state is frozen.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let mut input = input.clone();
    if input.autopilot {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;
    state.phase_ticks += 1;
    let phase_secs = state.phase_ticks as f32 * SIM_DT;

    match state.phase {
        GamePhase::Intro => {
            if phase_secs >= INTRO_DURATION {
                enter_phase(state, GamePhase::Countdown);
            }
        }

        GamePhase::Countdown => {
            if phase_secs >= COUNTDOWN_DURATION {
                enter_phase(state, GamePhase::Running);
                // Spawn and aid timers start counting from "Go"
                state.last_spawn_tick = state.time_ticks;
                state.last_aid_spawn_tick = state.time_ticks;
                log::info!("Run started (seed {})", state.seed);
            }
        }

        GamePhase::Running => {
            run_tick(state, input);
        }

        // Returned early above; nothing ticks after the run ends
        GamePhase::GameOver => {}
    }
}

/// One tick of active gameplay: input, spawn, motion, collisions, timers
fn run_tick(state: &mut GameState, input: &TickInput) {
    if input.move_left {
        state.player.shift(LaneShift::Left);
    }
    if input.move_right {
        state.player.shift(LaneShift::Right);
    }

    spawn_due(state);
    advance_and_cull(state);

    if resolve_collisions(state) {
        return;
    }
    if check_survival_timer(state) {
        return;
    }

    apply_difficulty(state);
}

/// Seconds between two tick counters
fn secs_between(later: u64, earlier: u64) -> f32 {
    later.saturating_sub(earlier) as f32 * SIM_DT
}

/// Fire any spawn triggers that are due this tick
fn spawn_due(state: &mut GameState) {
    // Periodic spawner, cadence tightens as game speed grows
    let interval = SPAWN_INTERVAL / state.game_speed as f32;
    if secs_between(state.time_ticks, state.last_spawn_tick) > interval {
        spawn_obstacle(state);
        state.last_spawn_tick = state.time_ticks;
    }

    // Timer-driven aid spawner, armed by the first oxygen pickup. Note the
    // spawn is still randomly typed, so the "aid" can be carbon dioxide;
    // the original behaves this way and the quirk is kept.
    if state.oxygen_timer_active
        && secs_between(state.time_ticks, state.last_aid_spawn_tick) > OXYGEN_SPAWN_INTERVAL
    {
        spawn_obstacle(state);
        state.last_aid_spawn_tick = state.time_ticks;
    }
}

/// Spawn one obstacle on a random lane with a random kind
fn spawn_obstacle(state: &mut GameState) {
    let lane_xs = lanes::lane_centers(SCREEN_WIDTH);
    let lane = state.rng.random_range(0..LANE_COUNT);
    let kind = if state.rng.random::<bool>() {
        ObstacleKind::Oxygen
    } else {
        ObstacleKind::CarbonDioxide
    };
    state.obstacles.push(Obstacle {
        pos: Vec2::new(lane_xs[lane], -OBSTACLE_RADIUS),
        kind,
    });
    log::debug!("Spawned {:?} in lane {}", kind, lane);
}

/// Advance every obstacle and drop the ones past the bottom edge
fn advance_and_cull(state: &mut GameState) {
    let dy = state.obstacle_speed * state.game_speed as f32;
    for ob in &mut state.obstacles {
        ob.pos.y += dy;
    }
    state.obstacles.retain(|ob| ob.pos.y <= SCREEN_HEIGHT);
}

/// Test every obstacle against the player; returns true if the run ended
///
/// Oxygen pickups are collected into a keep-mask and removed after the scan,
/// so removal never skips a neighbor. A carbon dioxide hit ends the run
/// immediately and leaves the rest of the tick's obstacles unevaluated.
fn resolve_collisions(state: &mut GameState) -> bool {
    let player = state.player;
    let mut consumed = vec![false; state.obstacles.len()];

    for i in 0..state.obstacles.len() {
        let obstacle = state.obstacles[i];
        if !player_hits_obstacle(&player, &obstacle) {
            continue;
        }
        match obstacle.kind {
            ObstacleKind::CarbonDioxide => {
                enter_game_over(state, GameOverReason::CarbonDioxide);
                return true;
            }
            ObstacleKind::Oxygen => {
                consumed[i] = true;
                state.score += 1;
                state.oxygen_timer_active = true;
                state.last_oxygen_tick = state.time_ticks;
                state.last_aid_spawn_tick = state.time_ticks;
                log::debug!("Oxygen pickup, score {}", state.score);
            }
        }
    }

    let mut idx = 0;
    state.obstacles.retain(|_| {
        let keep = !consumed[idx];
        idx += 1;
        keep
    });
    false
}

/// Oxygen watchdog; returns true if the run ended
///
/// Disarmed until the first pickup, so a slow start never kills the run.
fn check_survival_timer(state: &mut GameState) -> bool {
    if !state.oxygen_timer_active {
        return false;
    }
    if secs_between(state.time_ticks, state.last_oxygen_tick) > OXYGEN_LIFESPAN {
        enter_game_over(state, GameOverReason::OxygenStarved);
        return true;
    }
    false
}

/// Recompute speed parameters for the next tick
fn apply_difficulty(state: &mut GameState) {
    use super::state::DifficultyPolicy;
    match state.policy {
        DifficultyPolicy::ScoreThreshold => {
            state.game_speed = 1 + state.score / 5;
            state.obstacle_speed = BASE_OBSTACLE_SPEED + (state.score / 10) as f32;
        }
        DifficultyPolicy::StepIncrement => {
            // Loop in case score crossed more than one threshold this tick
            while state.score >= 10 * state.game_speed {
                state.game_speed += 1;
                state.obstacle_speed += 1.0;
                log::info!(
                    "Speed up: game_speed {} obstacle_speed {}",
                    state.game_speed,
                    state.obstacle_speed
                );
            }
        }
    }
}

/// Freeze the state and record the terminal result (entered at most once)
fn enter_game_over(state: &mut GameState, reason: GameOverReason) {
    debug_assert!(state.outcome.is_none());
    enter_phase(state, GamePhase::GameOver);
    state.outcome = Some(RunOutcome {
        score: state.score,
        reason,
    });
    log::info!("Game over: {} (score {})", reason.message(), state.score);
}

fn enter_phase(state: &mut GameState, phase: GamePhase) {
    state.phase = phase;
    state.phase_ticks = 0;
}

/// How far ahead of the player a carbon dioxide obstacle counts as a threat
/// (in ticks of fall at the current speed)
const DODGE_HORIZON_TICKS: f32 = 8.0;

/// Demo-mode AI: dodge carbon dioxide in the current lane, otherwise chase
/// the nearest oxygen. Writes lane intents into the cloned input.
fn autopilot(state: &GameState, input: &mut TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    let lane_xs = lanes::lane_centers(SCREEN_WIDTH);
    let player_y = state.player.center().y;
    let dy = state.obstacle_speed * state.game_speed as f32;
    let horizon = dy * DODGE_HORIZON_TICKS + OBSTACLE_RADIUS;

    // Per-lane: is a CO2 about to reach the player, and where is the
    // closest oxygen still above the player?
    let mut danger = [false; LANE_COUNT];
    let mut oxygen_y = [f32::NEG_INFINITY; LANE_COUNT];
    for ob in &state.obstacles {
        let Some(lane) = lane_xs.iter().position(|&x| (x - ob.pos.x).abs() < 1.0) else {
            continue;
        };
        match ob.kind {
            ObstacleKind::CarbonDioxide => {
                if ob.pos.y <= player_y && player_y - ob.pos.y < horizon {
                    danger[lane] = true;
                }
            }
            ObstacleKind::Oxygen => {
                if ob.pos.y <= player_y && ob.pos.y > oxygen_y[lane] {
                    oxygen_y[lane] = ob.pos.y;
                }
            }
        }
    }

    let lane = state.player.lane();
    let step = |target: usize, input: &mut TickInput| {
        if target < lane {
            input.move_left = true;
        } else if target > lane {
            input.move_right = true;
        }
    };

    if danger[lane] {
        // Bail toward any safe adjacent lane, preferring one with oxygen
        let mut candidates: Vec<usize> = [lane.wrapping_sub(1), lane + 1]
            .into_iter()
            .filter(|&l| l < LANE_COUNT && !danger[l])
            .collect();
        candidates.sort_by(|a, b| oxygen_y[*b].total_cmp(&oxygen_y[*a]));
        if let Some(&target) = candidates.first() {
            step(target, input);
        }
        return;
    }

    // Chase the lane whose oxygen is closest to the player, one step at a
    // time, never stepping into a dangerous lane
    if let Some(best) = (0..LANE_COUNT)
        .filter(|&l| oxygen_y[l] > f32::NEG_INFINITY)
        .max_by(|a, b| oxygen_y[*a].total_cmp(&oxygen_y[*b]))
    {
        let toward = if best < lane {
            lane - 1
        } else if best > lane {
            lane + 1
        } else {
            lane
        };
        if toward != lane && !danger[toward] {
            step(toward, input);
        }
    }
}
