//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod rider;
pub mod state;
pub mod suspension;
pub mod terrain;
pub mod tick;

pub use rider::{Intent, Rider};
pub use state::{GameState, RunPhase};
pub use suspension::{Wheel, WheelEnd, WheelFeedback, step_wheel};
pub use terrain::Terrain;
pub use tick::{TickInput, tick};
