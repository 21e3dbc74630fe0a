//! Ridgeline headless demo runner
//!
//! Drives the simulation with a scripted rider: full throttle, jumping
//! whenever grounded, advancing through every level. A windowed front end
//! would feed real keyboard state and a frame-limiter dt through the same
//! accumulator loop.
//!
//! Usage: `ridgeline [tuning.json]` — the optional argument overrides
//! physics balance; a missing or malformed file falls back to defaults.

use ridgeline::Tuning;
use ridgeline::consts::{MAX_SUBSTEPS, SIM_DT};
use ridgeline::sim::{GameState, Intent, RunPhase, TickInput, tick};

/// Hard stop for the scripted run (20 simulated minutes).
const MAX_TICKS: u64 = 60 * 60 * 20;

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read tuning file {path}: {e}; using defaults");
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning overrides from {path}");
            tuning
        }
        Err(e) => {
            log::warn!("Malformed tuning file {path}: {e}; using defaults");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Ridgeline (headless) starting...");

    let mut state = GameState::new();
    state.tuning = load_tuning();
    log::info!(
        "Level {}/{}: {} waypoints, finish at x={:.0}",
        state.level,
        state.max_levels,
        state.terrain.waypoints.len(),
        state.finish_x()
    );

    let mut input = TickInput {
        intent: Intent {
            forward: true,
            ..Default::default()
        },
        ..Default::default()
    };

    // Fixed-step accumulator; headless frames arrive at exactly one tick of
    // wall time, but the substep cap still bounds dt like a real frame loop.
    let mut accumulator = 0.0_f32;
    let mut ticks: u64 = 0;

    while ticks < MAX_TICKS {
        accumulator += SIM_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            input.intent.jump = state.rider.on_ground;
            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
            ticks += 1;

            if state.took_off {
                log::debug!("takeoff at x={:.0}", state.rider.pos.x);
            }
            if state.landed {
                log::debug!("landing at x={:.0}", state.rider.pos.x);
            }

            // Clear one-shot inputs after processing
            input.restart = false;
            input.next_level = false;
        }

        match state.phase {
            RunPhase::LevelComplete => {
                println!(
                    "Level {} complete: score {} in {} ticks",
                    state.level, state.score, state.time_ticks
                );
                input.next_level = true;
            }
            RunPhase::AllClear => {
                println!("All {} levels clear", state.max_levels);
                break;
            }
            RunPhase::Running => {}
        }
    }

    if state.phase != RunPhase::AllClear {
        println!(
            "Stopped at level {} after {} ticks, x={:.0}, score {}",
            state.level, ticks, state.rider.pos.x, state.score
        );
    }
}
