//! Fixed timestep simulation tick
//!
//! Each tick scrolls the world (recycling ground tiles as they leave the
//! screen), then applies gravity to the character and resolves landing.

use super::collision::clamp_to_ground;
use super::ground::next_ground_y;
use super::state::{Simulation, Tick};

impl Simulation {
    /// Advance the clock to `now`, stepping once per elapsed tick
    ///
    /// Stale or repeated ticks (`now <= current`) do nothing. Returns the
    /// number of steps applied.
    pub fn advance(&mut self, now: Tick) -> u64 {
        if now <= self.tick {
            return 0;
        }
        let steps = now - self.tick;
        for _ in 0..steps {
            self.step();
        }
        self.tick = now;
        steps
    }

    /// Apply exactly one tick of scrolling and physics
    ///
    /// Does not touch the tick counter; [`Simulation::advance`] owns it.
    pub fn step(&mut self) {
        self.step_scroll();
        self.step_character();
    }

    fn step_scroll(&mut self) {
        let tile_width = self.tuning.tile_width;

        self.scroll.velocity += self.tuning.scroll_acceleration;
        self.scroll.offset += self.scroll.velocity;

        // Loop, not `if`: at high speed several tiles can pass in one tick
        let mut recycled = 0;
        while self.scroll.offset >= tile_width {
            self.scroll.offset -= tile_width;
            self.recycle_tile();
            recycled += 1;
        }
        if recycled > 1 {
            log::debug!("Recycled {} tiles in one tick", recycled);
        }
    }

    fn recycle_tile(&mut self) {
        let prev = self.ground.newest();
        let y = next_ground_y(
            &mut self.rng,
            prev,
            self.tuning.ground_change_probability,
            self.tuning.ground_min,
            self.tuning.ground_max,
        );
        if y != prev {
            log::debug!("Ground height change: {} -> {}", prev, y);
        }
        self.ground.recycle(y);
    }

    fn step_character(&mut self) {
        self.character.v += self.tuning.gravity;
        self.character.y += self.character.v;
        clamp_to_ground(
            &mut self.character,
            &self.ground,
            self.tuning.character_tile,
            self.tuning.tile_height,
        );
    }
}
