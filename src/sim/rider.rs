//! The rider: body kinematics plus two independently suspended wheels
//!
//! The body has position, velocity and a scalar tilt angle; there is no full
//! rotational dynamics. Wheels never exist on their own, so the whole
//! aggregate is stepped through one exclusive reference and nothing aliases.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::suspension::{self, Wheel, WheelEnd};
use super::terrain::Terrain;
use crate::consts::*;
use crate::tuning::Tuning;

/// Discrete control flags sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intent {
    pub forward: bool,
    pub backward: bool,
    pub jump: bool,
    pub tilt_left: bool,
    pub tilt_right: bool,
}

/// The bike and its two wheels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rider {
    /// Body center in world coordinates (y grows downward)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Bike tilt in degrees, clamped symmetric
    pub tilt: f32,
    /// Derived each step from the wheel contact flags
    pub on_ground: bool,
    pub front: Wheel,
    pub rear: Wheel,
}

impl Rider {
    /// Spawn resting on the terrain at `x`, wheels at their rest distance.
    pub fn spawn(terrain: &Terrain, x: f32) -> Self {
        let y = terrain.height_at(x) - REST_OFFSET;
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            tilt: 0.0,
            on_ground: false,
            front: Wheel::new(WheelEnd::Front, y),
            rear: Wheel::new(WheelEnd::Rear, y),
        }
    }

    /// Advance the rider by one fixed timestep.
    ///
    /// The order is load-bearing: intent and gravity act on velocity first,
    /// the body integrates, then both wheels run their suspension step
    /// (front before rear) against the new position, each possibly feeding
    /// an impulse back into the body's vertical velocity. Contact flags and
    /// clamps come last. Must be called exactly once per fixed-step frame.
    pub fn step(&mut self, dt: f32, intent: &Intent, terrain: &Terrain, tuning: &Tuning) {
        if intent.forward {
            self.vel.x += tuning.accel * dt;
        }
        if intent.backward {
            self.vel.x -= tuning.accel * dt;
        }

        // Tilt only answers while airborne
        if !self.on_ground {
            if intent.tilt_left {
                self.tilt -= tuning.tilt_rate * dt;
            }
            if intent.tilt_right {
                self.tilt += tuning.tilt_rate * dt;
            }
        }

        // Friction applies every step, grounded or not
        self.vel.x *= tuning.friction;

        self.vel.y += tuning.gravity * dt;

        // Edge-triggered from the contact state alone: holding jump while
        // grounded re-launches the instant contact is regained
        if intent.jump && self.on_ground {
            self.vel.y = -tuning.jump_speed;
            self.on_ground = false;
        }

        self.pos += self.vel * dt;

        let front_ground = terrain.height_at(self.front.world_x(self.pos.x));
        let front_fb = suspension::step_wheel(&mut self.front, self.pos.y, front_ground, dt, tuning);
        self.vel.y += front_fb.body_impulse;

        let rear_ground = terrain.height_at(self.rear.world_x(self.pos.x));
        let rear_fb = suspension::step_wheel(&mut self.rear, self.pos.y, rear_ground, dt, tuning);
        self.vel.y += rear_fb.body_impulse;

        self.on_ground = front_fb.contact || rear_fb.contact;

        self.tilt = self.tilt.clamp(-tuning.tilt_limit, tuning.tilt_limit);
        self.vel.x = self.vel.x.clamp(tuning.speed_min, tuning.speed_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flat_terrain(y: f32) -> Terrain {
        Terrain {
            seed: 0,
            waypoints: vec![Vec2::new(0.0, y), Vec2::new(TERRAIN_LENGTH, y)],
        }
    }

    /// A rider settled into a riding attitude on flat ground: wheels at
    /// their clamped targets, body sagged below the wheel line.
    fn grounded_rider(terrain: &Terrain) -> Rider {
        let ground = terrain.height_at(SPAWN_X);
        let target = ground - WHEEL_RADIUS;
        let mut rider = Rider::spawn(terrain, SPAWN_X);
        rider.pos.y = target + 20.0;
        rider.front.y = target;
        rider.front.vy = 0.0;
        rider.rear.y = target;
        rider.rear.vy = 0.0;
        rider.on_ground = true;
        rider
    }

    #[test]
    fn test_spawn_position() {
        let terrain = Terrain::generate(2);
        let rider = Rider::spawn(&terrain, SPAWN_X);
        assert_eq!(rider.pos.x, SPAWN_X);
        assert_eq!(rider.pos.y, terrain.height_at(SPAWN_X) - REST_OFFSET);
        assert_eq!(rider.front.y, rider.pos.y + REST_OFFSET);
        assert_eq!(rider.rear.y, rider.pos.y + REST_OFFSET);
        assert!(!rider.on_ground);
    }

    #[test]
    fn test_first_step_on_flat_ground_makes_contact() {
        // Wheels spawn at ground level, below their radius-adjusted target,
        // so the first step clamps both and reports contact.
        let terrain = flat_terrain(400.0);
        let mut rider = Rider::spawn(&terrain, SPAWN_X);
        rider.step(SIM_DT, &Intent::default(), &terrain, &Tuning::default());
        assert!(rider.on_ground);
    }

    #[test]
    fn test_jump_launches_in_one_step() {
        let terrain = flat_terrain(400.0);
        let tuning = Tuning::default();
        let mut rider = grounded_rider(&terrain);

        let intent = Intent {
            jump: true,
            ..Default::default()
        };
        rider.step(SIM_DT, &intent, &terrain, &tuning);

        assert_eq!(rider.vel.y, -tuning.jump_speed);
        assert!(!rider.on_ground);
    }

    #[test]
    fn test_jump_requires_ground() {
        let terrain = flat_terrain(400.0);
        let tuning = Tuning::default();
        let mut rider = Rider::spawn(&terrain, SPAWN_X);
        rider.pos.y -= 300.0; // well airborne
        rider.front.y -= 300.0;
        rider.rear.y -= 300.0;

        let intent = Intent {
            jump: true,
            ..Default::default()
        };
        rider.step(SIM_DT, &intent, &terrain, &tuning);
        // Gravity only, no launch
        assert!(rider.vel.y > 0.0);
    }

    #[test]
    fn test_tilt_only_while_airborne() {
        let terrain = flat_terrain(400.0);
        let tuning = Tuning::default();

        let mut airborne = Rider::spawn(&terrain, SPAWN_X);
        airborne.pos.y -= 300.0;
        airborne.front.y -= 300.0;
        airborne.rear.y -= 300.0;
        let intent = Intent {
            tilt_left: true,
            ..Default::default()
        };
        airborne.step(SIM_DT, &intent, &terrain, &tuning);
        assert!(airborne.tilt < 0.0);

        let mut grounded = grounded_rider(&terrain);
        grounded.step(SIM_DT, &intent, &terrain, &tuning);
        assert_eq!(grounded.tilt, 0.0);
    }

    #[test]
    fn test_tilt_clamped() {
        let terrain = flat_terrain(400.0);
        let tuning = Tuning::default();
        let mut rider = Rider::spawn(&terrain, SPAWN_X);
        rider.pos.y -= 300.0;
        rider.front.y -= 300.0;
        rider.rear.y -= 300.0;
        rider.tilt = 74.9;
        let intent = Intent {
            tilt_right: true,
            ..Default::default()
        };
        for _ in 0..30 {
            rider.step(SIM_DT, &intent, &terrain, &tuning);
        }
        assert!(rider.tilt <= tuning.tilt_limit);
    }

    #[test]
    fn test_speed_clamped() {
        let terrain = flat_terrain(400.0);
        let tuning = Tuning::default();
        let mut rider = Rider::spawn(&terrain, SPAWN_X);
        rider.vel.x = 5000.0;
        rider.step(SIM_DT, &Intent::default(), &terrain, &tuning);
        assert_eq!(rider.vel.x, tuning.speed_max);

        rider.vel.x = -5000.0;
        rider.step(SIM_DT, &Intent::default(), &terrain, &tuning);
        assert_eq!(rider.vel.x, tuning.speed_min);
    }

    #[test]
    fn test_friction_applies_airborne() {
        let terrain = flat_terrain(400.0);
        let tuning = Tuning::default();
        let mut rider = Rider::spawn(&terrain, SPAWN_X);
        rider.pos.y -= 300.0;
        rider.front.y -= 300.0;
        rider.rear.y -= 300.0;
        rider.vel.x = 1000.0;
        rider.step(SIM_DT, &Intent::default(), &terrain, &tuning);
        assert_eq!(rider.vel.x, 1000.0 * tuning.friction);
    }

    #[test]
    fn test_stability_over_one_second() {
        // Regression bound: seed 2, spawn at x=200, 60 steps with no
        // input, vertical velocity stays tame.
        let terrain = Terrain::generate(2);
        let tuning = Tuning::default();
        let mut rider = Rider::spawn(&terrain, SPAWN_X);

        let mut max_vy = 0.0_f32;
        for _ in 0..60 {
            rider.step(SIM_DT, &Intent::default(), &terrain, &tuning);
            assert!(rider.pos.is_finite() && rider.vel.is_finite());
            assert!(rider.front.y.is_finite() && rider.rear.y.is_finite());
            max_vy = max_vy.max(rider.vel.y.abs());
        }
        assert!(max_vy < 5000.0, "vy blew up: {max_vy}");
    }

    #[test]
    fn test_wheels_never_penetrate() {
        let terrain = Terrain::generate(11);
        let tuning = Tuning::default();
        let mut rider = Rider::spawn(&terrain, SPAWN_X);
        let intent = Intent {
            forward: true,
            ..Default::default()
        };
        for _ in 0..300 {
            rider.step(SIM_DT, &intent, &terrain, &tuning);
            for wheel in [&rider.front, &rider.rear] {
                let target = terrain.height_at(wheel.world_x(rider.pos.x)) - WHEEL_RADIUS;
                assert!(wheel.y <= target + CONTACT_EPSILON);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_step_keeps_state_finite_and_clamped(
            seed in 0u64..500,
            steps in 1usize..240,
            flags in 0u8..32,
        ) {
            let terrain = Terrain::generate(seed);
            let tuning = Tuning::default();
            let intent = Intent {
                forward: flags & 1 != 0,
                backward: flags & 2 != 0,
                jump: flags & 4 != 0,
                tilt_left: flags & 8 != 0,
                tilt_right: flags & 16 != 0,
            };
            let mut rider = Rider::spawn(&terrain, SPAWN_X);
            for _ in 0..steps {
                rider.step(SIM_DT, &intent, &terrain, &tuning);
                prop_assert!(rider.pos.is_finite());
                prop_assert!(rider.vel.is_finite());
                prop_assert!(rider.tilt.is_finite());
                prop_assert!(rider.tilt >= -tuning.tilt_limit && rider.tilt <= tuning.tilt_limit);
                prop_assert!(rider.vel.x >= tuning.speed_min && rider.vel.x <= tuning.speed_max);
                for wheel in [&rider.front, &rider.rear] {
                    prop_assert!(wheel.y.is_finite() && wheel.vy.is_finite());
                    let target = terrain.height_at(wheel.world_x(rider.pos.x)) - WHEEL_RADIUS;
                    prop_assert!(wheel.y <= target + CONTACT_EPSILON);
                }
            }
        }
    }
}
