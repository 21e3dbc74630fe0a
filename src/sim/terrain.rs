//! Procedural terrain height field
//!
//! A level's ground is a piecewise-linear polyline of waypoints produced by a
//! seeded random walk. Waypoints are strictly increasing in x, so ground
//! height under any x is a binary search plus one interpolation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An immutable height field for one level.
///
/// Rebuilt wholesale on restart or level advance, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Generator input, kept so a restart can rebuild the identical level
    pub seed: u64,
    /// (x, y) samples, strictly increasing in x, first at x=0
    pub waypoints: Vec<Vec2>,
}

impl Terrain {
    /// Generate a level from a seed.
    ///
    /// Deterministic: the RNG is constructed locally from the seed, so the
    /// same seed always yields the identical waypoint sequence. The walk
    /// starts at (0, baseline) and always emits at least two waypoints.
    pub fn generate(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut waypoints = Vec::new();

        let mut x = 0.0_f32;
        let mut y = TERRAIN_BASELINE;
        waypoints.push(Vec2::new(x, y));

        while x < TERRAIN_LENGTH {
            let dx = rng.random_range(TERRAIN_STEP_X_MIN..=TERRAIN_STEP_X_MAX);
            let dy = rng.random_range(-TERRAIN_STEP_Y_MAX..=TERRAIN_STEP_Y_MAX);
            x += dx as f32;
            y = (y + dy as f32).clamp(TERRAIN_MIN_Y, TERRAIN_MAX_Y);
            waypoints.push(Vec2::new(x, y));
        }

        Self { seed, waypoints }
    }

    /// Ground height under `x`, linearly interpolated between waypoints.
    ///
    /// Outside the generated range this clamps to the first/last waypoint's
    /// height. Continuous everywhere: querying a waypoint's exact x returns
    /// that waypoint's y from either side.
    pub fn height_at(&self, x: f32) -> f32 {
        let first = self.waypoints[0];
        if x <= first.x {
            return first.y;
        }
        let last = self.waypoints[self.waypoints.len() - 1];
        if x >= last.x {
            return last.y;
        }

        // First waypoint at or past x; the early returns guarantee
        // 0 < idx < len and waypoints[idx - 1].x < x.
        let idx = self.waypoints.partition_point(|p| p.x < x);
        let a = self.waypoints[idx - 1];
        let b = self.waypoints[idx];

        let span = b.x - a.x;
        if span <= 0.0 {
            // Degenerate zero-width segment: take the lower-index endpoint
            return a.y;
        }
        let t = (x - a.x) / span;
        a.y + t * (b.y - a.y)
    }

    /// x of the last waypoint.
    pub fn length(&self) -> f32 {
        self.waypoints[self.waypoints.len() - 1].x
    }

    /// Finish line for this level.
    pub fn finish_x(&self) -> f32 {
        self.length() - FINISH_MARGIN
    }
}
