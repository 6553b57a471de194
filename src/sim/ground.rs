//! Procedural ground window
//!
//! The ground is a sliding window over an endless terrain, one height sample
//! per tile. Samples are stored in a ring so recycling never shifts memory:
//! - index 0 is the oldest (leftmost) sample
//! - the last index is the newest, generated but not yet on screen

use rand::Rng;

/// Fixed-length ring of ground heights
#[derive(Debug, Clone, PartialEq)]
pub struct GroundWindow {
    samples: Vec<f32>,
    /// Storage slot holding logical index 0
    head: usize,
}

impl GroundWindow {
    /// Create a flat window of `len` samples at height `y`
    pub fn flat(len: usize, y: f32) -> Self {
        assert!(len > 0, "ground window must hold at least one sample");
        Self {
            samples: vec![y; len],
            head: 0,
        }
    }

    /// Reset every sample to height `y` in place
    pub fn fill(&mut self, y: f32) {
        self.samples.fill(y);
        self.head = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at logical index `i` (0 = oldest)
    #[inline]
    pub fn get(&self, i: usize) -> Option<f32> {
        if i >= self.len() {
            return None;
        }
        Some(self.samples[(self.head + i) % self.len()])
    }

    /// Newest generated sample
    #[inline]
    pub fn newest(&self) -> f32 {
        self.samples[(self.head + self.len() - 1) % self.len()]
    }

    /// Drop the oldest sample and append `y` as the newest
    #[inline]
    pub fn recycle(&mut self, y: f32) {
        // The oldest slot becomes the newest once head moves past it
        self.samples[self.head] = y;
        self.head = (self.head + 1) % self.len();
    }

    /// Samples oldest-first
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let (front, back) = self.samples.split_at(self.head);
        back.iter().chain(front.iter()).copied()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.iter().collect()
    }
}

/// Generate the next ground height from the current newest one
///
/// With probability `1/change_probability` a fresh height is drawn uniformly
/// from `[min, max)`; otherwise the terrain continues flat.
///
/// Panics if `change_probability` is 0 or `min >= max`.
pub fn next_ground_y<R: Rng + ?Sized>(
    rng: &mut R,
    prev: f32,
    change_probability: u32,
    min: f32,
    max: f32,
) -> f32 {
    if rng.random_range(0..change_probability) == 0 {
        loop {
            // Float sampling can round up onto `max`; redraw to keep it exclusive
            let y = rng.random_range(min..max);
            if y < max {
                return y;
            }
        }
    } else {
        prev
    }
}
