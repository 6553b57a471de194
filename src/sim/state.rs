//! Simulation state and read-only snapshots
//!
//! Everything the runner needs between ticks lives in [`Simulation`]. The
//! renderer only ever sees it through accessors or a [`Snapshot`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ground::GroundWindow;
use crate::tuning::{Tuning, TuningError};

/// Simulation time in fixed ticks
pub type Tick = u64;

/// Horizontal scrolling of the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Distance scrolled past the current oldest tile, in `[0, tile_width)`
    pub offset: f32,
    /// Distance scrolled per tick
    pub velocity: f32,
}

/// Vertical state of the character (positive y is down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    pub y: f32,
    pub v: f32,
}

impl CharacterState {
    /// Resting on the ground: not moving, and exactly at the support height
    pub fn is_grounded(&self, support_y: f32) -> bool {
        self.v == 0.0 && self.y == support_y
    }
}

/// Read-only view of the simulation handed to the renderer each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: Tick,
    pub scroll_offset: f32,
    pub scroll_velocity: f32,
    /// Ground heights, oldest (leftmost) first
    pub ground: Vec<f32>,
    pub character_y: f32,
    pub character_v: f32,
    pub grounded: bool,
}

/// The runner's complete deterministic state
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(super) tuning: Tuning,
    pub(super) seed: u64,
    /// Single RNG stream for the simulation's lifetime; never reseeded
    pub(super) rng: Pcg32,
    /// Last tick the simulation has been advanced to
    pub(super) tick: Tick,
    pub(super) scroll: ScrollState,
    pub(super) character: CharacterState,
    pub(super) ground: GroundWindow,
}

impl Simulation {
    /// Create a simulation with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    /// Create a simulation with custom tuning
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        let ground = GroundWindow::flat(tuning.ground_len(), tuning.initial_ground_y);
        let mut sim = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick: 0,
            scroll: ScrollState {
                offset: 0.0,
                velocity: 0.0,
            },
            character: CharacterState::default(),
            ground,
            tuning,
        };
        sim.reset_state();
        sim
    }

    /// Return every piece of game state to its startup value
    ///
    /// The tick counter goes back to 0. The RNG stream is left as is, so a
    /// restarted run gets fresh terrain.
    pub fn reset(&mut self) {
        self.reset_state();
        log::info!("Simulation reset (seed {})", self.seed);
    }

    fn reset_state(&mut self) {
        self.tick = 0;
        self.scroll = ScrollState {
            offset: 0.0,
            velocity: self.tuning.initial_scroll_velocity,
        };
        self.character = CharacterState::default();
        self.ground.fill(self.tuning.initial_ground_y);
    }

    /// Move the clock to `tick` without simulating the ticks in between
    ///
    /// Used when a session (re)starts against a host clock that has been
    /// running for a while.
    pub fn rebase(&mut self, tick: Tick) {
        self.tick = tick;
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    pub fn ground(&self) -> &GroundWindow {
        &self.ground
    }

    /// Height the character rests at on its current tile pair
    pub fn support_y(&self) -> f32 {
        super::collision::support_height(
            &self.ground,
            self.tuning.character_tile,
            self.tuning.tile_height,
        )
        // Tuning validation guarantees both tiles are inside the window
        .unwrap_or(f32::INFINITY)
    }

    pub fn is_grounded(&self) -> bool {
        self.character.is_grounded(self.support_y())
    }

    /// Copy out everything a renderer needs for one frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            scroll_offset: self.scroll.offset,
            scroll_velocity: self.scroll.velocity,
            ground: self.ground.to_vec(),
            character_y: self.character.y,
            character_v: self.character.v,
            grounded: self.is_grounded(),
        }
    }
}
