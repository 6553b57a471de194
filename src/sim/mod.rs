//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod ground;
pub mod state;
pub mod tick;

pub use collision::{clamp_to_ground, support_height};
pub use ground::{GroundWindow, next_ground_y};
pub use state::{CharacterState, ScrollState, Simulation, Snapshot, Tick};
