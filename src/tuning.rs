//! Data-driven physics balance
//!
//! Every constant that shapes how the bike feels lives here. The defaults
//! reproduce the tuned demo; a JSON blob can override any subset of fields
//! without touching the rest.

use serde::{Deserialize, Serialize};

/// Dynamics constants threaded through every simulation step.
///
/// Geometry (wheel offset/radius, rest distance) and terrain generation
/// parameters are compile-time constants in [`crate::consts`]; only the
/// feel-relevant dynamics are overridable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal drive acceleration (units/s²)
    pub accel: f32,
    /// Gravity on the body (units/s², y grows downward)
    pub gravity: f32,
    /// Upward launch speed when jumping (units/s, applied as -vy)
    pub jump_speed: f32,
    /// Per-step horizontal velocity multiplier, applied grounded or airborne
    pub friction: f32,
    /// Airborne tilt rate (degrees/s)
    pub tilt_rate: f32,
    /// Tilt angle clamp (degrees, symmetric)
    pub tilt_limit: f32,
    /// Horizontal speed clamp
    pub speed_min: f32,
    pub speed_max: f32,
    /// Suspension spring stiffness
    pub spring_k: f32,
    /// Suspension damper coefficient
    pub damper_c: f32,
    /// Body mass the suspension forces act against
    pub mass: f32,
    /// Divisor converting a bottomed-out wheel's spring force into a body
    /// impulse. Tuned for feel, not derived from the force balance; changing
    /// it changes how hard landings kick the body.
    pub impulse_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel: 1400.0,
            gravity: 2600.0,
            jump_speed: 950.0,
            friction: 0.996,
            tilt_rate: 120.0,
            tilt_limit: 75.0,
            speed_min: -1200.0,
            speed_max: 1600.0,
            spring_k: 8000.0,
            damper_c: 800.0,
            mass: 70.0,
            impulse_divisor: 100.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning override blob. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
