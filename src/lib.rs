//! Gopher Runner - simulation core for a side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scrolling, ground generation, gravity, collision)
//! - `tuning`: Data-driven game constants
//! - `session`: Host-facing session lifecycle and frame driving

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Session, ticks_since};
pub use sim::{Simulation, Snapshot, Tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical simulation rate (ticks per second of wall-clock time)
    pub const TICKS_PER_SECOND: u64 = 60;

    /// Tile dimensions in world units
    pub const TILE_WIDTH: f32 = 16.0;
    pub const TILE_HEIGHT: f32 = 16.0;
    /// Tiles across the visible screen
    pub const TILES_X: usize = 16;
    /// Tiles down the visible screen
    pub const TILES_Y: usize = 16;
    /// Extra ground samples generated beyond the right edge of the screen
    pub const LOOKAHEAD_TILES: usize = 3;

    /// Horizontal tile the character stands on (0-indexed)
    pub const CHARACTER_TILE: usize = 1;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.1;
    /// Scroll speed gained per tick
    pub const SCROLL_ACCELERATION: f32 = 0.001;
    /// Scroll speed at reset
    pub const INITIAL_SCROLL_VELOCITY: f32 = 1.0;

    /// 1/probability that a new ground sample changes height
    pub const GROUND_CHANGE_PROBABILITY: u32 = 5;
    /// Highest ground surface (smallest y)
    pub const GROUND_MIN: f32 = TILE_HEIGHT * (TILES_Y - TILES_Y / 5) as f32;
    /// Lowest ground surface (largest y, bottom of the screen)
    pub const GROUND_MAX: f32 = TILE_HEIGHT * TILES_Y as f32;
    /// Flat ground height every sample starts at
    pub const INITIAL_GROUND_Y: f32 = TILE_HEIGHT * (TILES_Y - 1) as f32;
}
