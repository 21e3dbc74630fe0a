//! Run state: one terrain, one rider, and the level progression machine

use serde::{Deserialize, Serialize};

use super::rider::Rider;
use super::terrain::Terrain;
use crate::consts::*;
use crate::tuning::Tuning;

/// Where the current run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Simulation advancing every tick
    Running,
    /// Rider crossed the finish line; waiting for restart or next-level
    LevelComplete,
    /// Last level cleared, nothing left to advance to
    AllClear,
}

/// Complete game state (deterministic, serializable).
///
/// Owns exactly one terrain and one rider at a time; both are replaced
/// wholesale on restart or level change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current level, 1-based
    pub level: u32,
    pub max_levels: u32,
    /// Best distance reached this level; never decreases within a level
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: RunPhase,
    pub terrain: Terrain,
    pub rider: Rider,
    #[serde(default)]
    pub tuning: Tuning,
    /// Ground contact gained this tick (false→true edge); sound cue hook
    #[serde(skip)]
    pub landed: bool,
    /// Ground contact lost this tick (true→false edge); sound cue hook
    #[serde(skip)]
    pub took_off: bool,
}

impl GameState {
    /// Start a fresh run at level 1.
    pub fn new() -> Self {
        Self::with_level(1)
    }

    /// Start directly at a given level (1-based).
    pub fn with_level(level: u32) -> Self {
        let terrain = Terrain::generate(level_seed(level));
        let rider = Rider::spawn(&terrain, SPAWN_X);
        Self {
            level,
            max_levels: MAX_LEVELS,
            score: 0,
            time_ticks: 0,
            phase: RunPhase::Running,
            terrain,
            rider,
            tuning: Tuning::default(),
            landed: false,
            took_off: false,
        }
    }

    /// Finish line of the current level.
    pub fn finish_x(&self) -> f32 {
        self.terrain.finish_x()
    }

    /// Rebuild the current level from its seed and respawn the rider.
    pub fn restart_level(&mut self) {
        self.reset_to_level(self.level);
        log::info!("Level {} restarted", self.level);
    }

    /// Advance if there is a next level; otherwise park in [`RunPhase::AllClear`].
    pub fn advance_level(&mut self) {
        if self.level < self.max_levels {
            self.reset_to_level(self.level + 1);
            log::info!("Advanced to level {}/{}", self.level, self.max_levels);
        } else {
            self.phase = RunPhase::AllClear;
            log::info!("All {} levels clear", self.max_levels);
        }
    }

    fn reset_to_level(&mut self, level: u32) {
        self.level = level;
        self.terrain = Terrain::generate(level_seed(level));
        self.rider = Rider::spawn(&self.terrain, SPAWN_X);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = RunPhase::Running;
        self.landed = false;
        self.took_off = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Terrain seed for a level index.
pub fn level_seed(level: u32) -> u64 {
    LEVEL_SEED_BASE + u64::from(level) * LEVEL_SEED_STRIDE
}
