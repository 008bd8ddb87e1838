//! Oxygen Run entry point
//!
//! Runs a complete game headlessly at the fixed 30 Hz cadence, with the
//! demo-mode AI steering the player unless autopilot is disabled in the
//! settings. The final score and reason are printed when the run ends.

use oxygen_run::consts::*;
use oxygen_run::platform::FrameClock;
use oxygen_run::settings::Settings;
use oxygen_run::sim::{DifficultyPolicy, GamePhase, GameState, TickInput, tick};

/// Command-line overrides for a run
struct Options {
    seed: Option<u64>,
    policy: Option<DifficultyPolicy>,
    /// Safety bound for scripted runs; 0 means unbounded
    max_ticks: u64,
    /// Run as fast as possible instead of pacing at 30 Hz
    turbo: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        seed: None,
        policy: None,
        max_ticks: 0,
        turbo: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                options.seed = Some(value.parse().map_err(|_| "invalid --seed value")?);
            }
            "--policy" => {
                let value = args.next().ok_or("--policy requires a value")?;
                options.policy = Some(match value.as_str() {
                    "step" => DifficultyPolicy::StepIncrement,
                    "score" => DifficultyPolicy::ScoreThreshold,
                    _ => return Err(format!("unknown policy '{value}' (step|score)")),
                });
            }
            "--max-ticks" => {
                let value = args.next().ok_or("--max-ticks requires a value")?;
                options.max_ticks = value.parse().map_err(|_| "invalid --max-ticks value")?;
            }
            "--turbo" => options.turbo = true,
            "--help" | "-h" => {
                println!(
                    "usage: oxygen-run [--seed N] [--policy step|score] [--max-ticks N] [--turbo]"
                );
                std::process::exit(0);
            }
            _ => return Err(format!("unknown argument '{arg}'")),
        }
    }
    Ok(options)
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("oxygen-run: {err}");
            std::process::exit(2);
        }
    };

    let settings = Settings::load();
    let policy = options.policy.unwrap_or(settings.difficulty);
    let seed = options.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Oxygen Run starting (seed {seed}, policy {policy:?})");

    let mut state = GameState::with_policy(seed, policy);
    let mut clock = FrameClock::new();
    let input = TickInput {
        autopilot: settings.autopilot,
        ..Default::default()
    };

    let status_every = if settings.status_interval_secs > 0.0 {
        (settings.status_interval_secs * TICK_HZ as f32) as u64
    } else {
        0
    };
    let mut last_label = None;

    while state.phase != GamePhase::GameOver {
        if options.max_ticks > 0 && state.time_ticks >= options.max_ticks {
            log::warn!("Tick budget exhausted, stopping run");
            break;
        }

        tick(&mut state, &input);

        let snapshot = state.snapshot();
        match snapshot.phase {
            GamePhase::Countdown => {
                let label = state.countdown_label();
                if label != last_label {
                    if let Some(label) = label {
                        println!("{label}");
                    }
                    last_label = label;
                }
            }
            GamePhase::Running => {
                if status_every > 0 && state.time_ticks % status_every == 0 {
                    log::info!(
                        "t={:.1}s score={} speed={} obstacles={}",
                        state.now_secs(),
                        snapshot.score,
                        snapshot.game_speed,
                        snapshot.obstacles.len()
                    );
                }
            }
            _ => {}
        }

        if !options.turbo {
            clock.wait();
        }
    }

    println!("GAME OVER");
    if let Some(outcome) = state.outcome {
        println!("{}", outcome.reason.message());
        println!("Score: {}", outcome.score);
    } else {
        println!("Score: {}", state.score);
    }
}
