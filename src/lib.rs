//! Ridgeline - a side-scrolling mountain bike physics playground
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, suspension, rider, level loop)
//! - `tuning`: Data-driven physics balance
//!
//! Rendering, input polling and audio are external front ends: they feed a
//! per-frame [`sim::TickInput`] in and read positions, tilt angle, waypoints
//! and ground-contact flags back out. The simulation itself never blocks and
//! performs no I/O.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the frame limiter)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// World vertical extent; y grows downward, so larger y is lower
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Terrain generation: horizontal step range (units)
    pub const TERRAIN_STEP_X_MIN: i32 = 80;
    pub const TERRAIN_STEP_X_MAX: i32 = 220;
    /// Terrain generation: vertical delta drawn from ±this (units)
    pub const TERRAIN_STEP_Y_MAX: i32 = 60;
    /// First waypoint height
    pub const TERRAIN_BASELINE: f32 = WORLD_HEIGHT - 80.0;
    /// Vertical band the height walk is clamped to
    pub const TERRAIN_MIN_Y: f32 = 150.0;
    pub const TERRAIN_MAX_Y: f32 = WORLD_HEIGHT - 40.0;
    /// Generation stops once x passes this
    pub const TERRAIN_LENGTH: f32 = 10_000.0;
    /// Finish line sits this far before the last waypoint
    pub const FINISH_MARGIN: f32 = 120.0;

    /// Horizontal distance from body center to each wheel
    pub const WHEEL_OFFSET: f32 = 24.0;
    pub const WHEEL_RADIUS: f32 = 14.0;
    /// Body-to-wheel rest distance (the wheel's natural resting point below the body)
    pub const REST_OFFSET: f32 = 12.0;
    /// A wheel within this of its clamped target counts as ground contact
    pub const CONTACT_EPSILON: f32 = 0.1;

    /// Rider spawn x on every level
    pub const SPAWN_X: f32 = 200.0;

    /// Levels per run
    pub const MAX_LEVELS: u32 = 3;
    /// Level n is generated from seed BASE + n * STRIDE
    pub const LEVEL_SEED_BASE: u64 = 42;
    pub const LEVEL_SEED_STRIDE: u64 = 13;
}
