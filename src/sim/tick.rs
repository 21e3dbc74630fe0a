//! Fixed timestep simulation tick
//!
//! One call advances the whole game by `dt`: rider physics while running,
//! finish-line detection, and the level-complete menu transitions.

use super::rider::Intent;
use super::state::{GameState, RunPhase};

/// Input commands for a single tick (deterministic).
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional/action flags sampled from the keyboard this frame
    pub intent: Intent,
    /// Restart the current level (level-complete menu)
    pub restart: bool,
    /// Advance to the next level (level-complete menu)
    pub next_level: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.landed = false;
    state.took_off = false;

    match state.phase {
        RunPhase::Running => {
            state.time_ticks += 1;

            let was_on_ground = state.rider.on_ground;
            state
                .rider
                .step(dt, &input.intent, &state.terrain, &state.tuning);

            // Contact edges for the audio front end
            state.landed = !was_on_ground && state.rider.on_ground;
            state.took_off = was_on_ground && !state.rider.on_ground;

            // Distance score never decreases within a level
            state.score = state.score.max(state.rider.pos.x.max(0.0).floor() as u64);

            if state.rider.pos.x >= state.terrain.finish_x() {
                state.phase = RunPhase::LevelComplete;
                log::info!(
                    "Level {} complete after {} ticks, score {}",
                    state.level,
                    state.time_ticks,
                    state.score
                );
            }
        }
        RunPhase::LevelComplete => {
            if input.restart {
                state.restart_level();
            } else if input.next_level {
                state.advance_level();
            }
        }
        RunPhase::AllClear => {
            // Terminal display state; only a restart leaves it
            if input.restart {
                state.restart_level();
            }
        }
    }
}
