//! Per-wheel spring-damper suspension
//!
//! Each wheel has independent vertical dynamics coupled to the body through a
//! spring-damper, instead of rigid contact. Bumps get absorbed smoothly
//! without a constraint solver; the only hard rule is the ground clamp, which
//! stops a wheel from sinking below the surface and hands the spring load
//! back to the body as an impulse.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Which end of the bike a wheel sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelEnd {
    Front,
    Rear,
}

impl WheelEnd {
    /// Horizontal offset of this wheel from the body center.
    #[inline]
    pub fn offset_x(self) -> f32 {
        match self {
            WheelEnd::Front => WHEEL_OFFSET,
            WheelEnd::Rear => -WHEEL_OFFSET,
        }
    }
}

/// Vertical state of one wheel. Wheels only exist inside a
/// [`Rider`](super::rider::Rider); the body owns both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wheel {
    pub end: WheelEnd,
    /// World y of the wheel center (y grows downward)
    pub y: f32,
    pub vy: f32,
}

impl Wheel {
    /// A wheel hanging at its rest distance below a body at `body_y`.
    pub fn new(end: WheelEnd, body_y: f32) -> Self {
        Self {
            end,
            y: body_y + REST_OFFSET,
            vy: 0.0,
        }
    }

    /// World x of the wheel given the body center x.
    #[inline]
    pub fn world_x(&self, body_x: f32) -> f32 {
        body_x + self.end.offset_x()
    }
}

/// What one suspension step fed back into the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelFeedback {
    /// Vertical velocity change for the body when the wheel bottomed out
    pub body_impulse: f32,
    /// The wheel rests at its ground-clamped position this frame
    pub contact: bool,
}

/// Advance one wheel by `dt` against the ground height under it.
///
/// The wheel's target is the surface minus its radius. Spring force comes
/// from how far the body sits from that target relative to the rest
/// distance; the damper opposes the wheel's own vertical velocity. A wheel
/// that would end the step below its target is clamped there with its
/// velocity zeroed, and the spring force is converted into a body impulse
/// through the feel-tuned divisor.
pub fn step_wheel(
    wheel: &mut Wheel,
    body_y: f32,
    ground_y: f32,
    dt: f32,
    tuning: &Tuning,
) -> WheelFeedback {
    let target_y = ground_y - WHEEL_RADIUS;

    let compression = (body_y + REST_OFFSET) - target_y;
    let spring = -tuning.spring_k * (compression - REST_OFFSET);
    let damper = -tuning.damper_c * wheel.vy;
    let accel = (spring + damper) / tuning.mass;
    wheel.vy += accel * dt;
    wheel.y += wheel.vy * dt;

    let mut feedback = WheelFeedback::default();
    if wheel.y > target_y {
        // Non-penetration clamp; y grows downward, so > target means the
        // wheel sank below the surface.
        wheel.y = target_y;
        wheel.vy = 0.0;
        feedback.body_impulse = -spring / tuning.impulse_divisor * dt;
    }
    feedback.contact = wheel.y >= target_y - CONTACT_EPSILON;
    feedback
}
