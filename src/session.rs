//! Host-facing session
//!
//! Owns the simulation for the lifetime of the app and maps host events onto
//! it: becoming visible starts a run, becoming hidden stops it, and each
//! paint advances the clock and hands back a snapshot to draw.

use std::time::Duration;

use crate::consts::TICKS_PER_SECOND;
use crate::sim::{Simulation, Snapshot, Tick};
use crate::tuning::{Tuning, TuningError};

/// Convert wall-clock time since startup into simulation ticks
pub fn ticks_since(elapsed: Duration) -> Tick {
    (elapsed.as_nanos() * TICKS_PER_SECOND as u128 / 1_000_000_000) as Tick
}

/// Top-level game session
#[derive(Debug)]
pub struct Session {
    sim: Simulation,
    running: bool,
    /// Latest press signal from touch or keyboard
    pressed: bool,
}

impl Session {
    /// Create a stopped session; call [`Session::start`] before driving frames
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Ok(Self {
            sim: Simulation::with_tuning(tuning, seed)?,
            running: false,
            pressed: false,
        })
    }

    /// Begin a fresh run at host tick `now`
    pub fn start(&mut self, now: Tick) {
        self.sim.reset();
        self.sim.rebase(now);
        self.pressed = false;
        self.running = true;
        log::info!("Session started at tick {}", now);
    }

    /// Stop the run; frames are ignored until the next start
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Session stopped at tick {}", self.sim.tick());
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance to `now` and return the state to draw, if running
    pub fn frame(&mut self, now: Tick) -> Option<Snapshot> {
        if !self.running {
            return None;
        }
        self.sim.advance(now);
        Some(self.sim.snapshot())
    }

    /// Record a press or release
    ///
    /// The simulation has no jump yet, so this only updates the signal.
    pub fn press(&mut self, down: bool) {
        if down != self.pressed {
            log::debug!("Press {}", if down { "down" } else { "up" });
        }
        self.pressed = down;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_ticks_since() {
        assert_eq!(ticks_since(Duration::ZERO), 0);
        assert_eq!(ticks_since(Duration::from_millis(16)), 0);
        assert_eq!(ticks_since(Duration::from_millis(17)), 1);
        assert_eq!(ticks_since(Duration::from_secs(2)), 120);
    }

    #[test]
    fn test_stopped_session_ignores_frames() {
        let mut session = Session::new(Tuning::default(), 1).unwrap();
        assert!(!session.is_running());
        assert!(session.frame(100).is_none());
        assert_eq!(session.simulation().tick(), 0);
    }

    #[test]
    fn test_start_rebases_clock() {
        let mut session = Session::new(Tuning::default(), 1).unwrap();
        session.start(1_000);

        let snap = session.frame(1_001).unwrap();
        assert_eq!(snap.tick, 1_001);
        // One step only, not a replay of the first 1000 ticks
        assert_eq!(snap.scroll_velocity, INITIAL_SCROLL_VELOCITY + SCROLL_ACCELERATION);
        assert_eq!(snap.character_y, GRAVITY);
    }

    #[test]
    fn test_stop_then_restart_resets() {
        let mut session = Session::new(Tuning::default(), 9).unwrap();
        session.start(0);
        session.frame(300);
        session.stop();
        assert!(session.frame(400).is_none());
        assert_eq!(session.simulation().tick(), 300);

        session.start(500);
        let snap = session.frame(500).unwrap();
        assert_eq!(snap.scroll_offset, 0.0);
        assert_eq!(snap.character_y, 0.0);
        assert!(snap.ground.iter().all(|&y| y == INITIAL_GROUND_Y));
    }

    #[test]
    fn test_press_does_not_touch_physics() {
        let mut a = Session::new(Tuning::default(), 4).unwrap();
        let mut b = Session::new(Tuning::default(), 4).unwrap();
        a.start(0);
        b.start(0);
        a.press(true);
        assert!(a.is_pressed());
        assert_eq!(a.frame(90), b.frame(90));
        a.press(false);
        assert!(!a.is_pressed());
    }
}
