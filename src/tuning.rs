//! Data-driven game constants
//!
//! Defaults reproduce the classic runner sample. A JSON file may override any
//! subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Upper bound on `visible_tiles + lookahead_tiles`
pub const MAX_GROUND_TILES: usize = 4096;

/// Errors raised while loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Grid ===
    pub tile_width: f32,
    pub tile_height: f32,
    /// Ground samples covering the visible screen
    pub visible_tiles: usize,
    /// Ground samples generated past the right edge
    pub lookahead_tiles: usize,
    /// Horizontal tile the character occupies
    pub character_tile: usize,

    // === Motion ===
    pub gravity: f32,
    pub scroll_acceleration: f32,
    pub initial_scroll_velocity: f32,

    // === Ground ===
    /// A new sample changes height with probability 1/this
    pub ground_change_probability: u32,
    pub ground_min: f32,
    pub ground_max: f32,
    pub initial_ground_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            visible_tiles: TILES_X,
            lookahead_tiles: LOOKAHEAD_TILES,
            character_tile: CHARACTER_TILE,

            gravity: GRAVITY,
            scroll_acceleration: SCROLL_ACCELERATION,
            initial_scroll_velocity: INITIAL_SCROLL_VELOCITY,

            ground_change_probability: GROUND_CHANGE_PROBABILITY,
            ground_min: GROUND_MIN,
            ground_max: GROUND_MAX,
            initial_ground_y: INITIAL_GROUND_Y,
        }
    }
}

impl Tuning {
    /// Total number of ground samples kept by the simulation
    ///
    /// Saturates on overflow; [`Tuning::validate`] rejects such values.
    pub fn ground_len(&self) -> usize {
        self.visible_tiles.saturating_add(self.lookahead_tiles)
    }

    /// Check every field is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> TuningError {
            TuningError::Invalid { field, reason }
        }

        let floats = [
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("gravity", self.gravity),
            ("scroll_acceleration", self.scroll_acceleration),
            ("initial_scroll_velocity", self.initial_scroll_velocity),
            ("ground_min", self.ground_min),
            ("ground_max", self.ground_max),
            ("initial_ground_y", self.initial_ground_y),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if self.tile_width <= 0.0 {
            return Err(invalid("tile_width", "must be positive"));
        }
        if self.tile_height <= 0.0 {
            return Err(invalid("tile_height", "must be positive"));
        }
        if self.gravity < 0.0 {
            return Err(invalid("gravity", "must not be negative"));
        }
        if self.scroll_acceleration < 0.0 {
            return Err(invalid("scroll_acceleration", "must not be negative"));
        }
        if self.initial_scroll_velocity < 0.0 {
            return Err(invalid("initial_scroll_velocity", "must not be negative"));
        }
        if self.ground_change_probability == 0 {
            return Err(invalid("ground_change_probability", "must be at least 1"));
        }
        if self.ground_min >= self.ground_max {
            return Err(invalid("ground_min", "must be below ground_max"));
        }
        if self.lookahead_tiles == 0 {
            return Err(invalid("lookahead_tiles", "must be at least 1"));
        }
        let ground_len = self
            .visible_tiles
            .checked_add(self.lookahead_tiles)
            .filter(|&len| len <= MAX_GROUND_TILES)
            .ok_or_else(|| invalid("visible_tiles", "too large"))?;
        // The clamp reads the character's tile and the one to its right
        let support_tile = self
            .character_tile
            .checked_add(1)
            .ok_or_else(|| invalid("character_tile", "too large"))?;
        if support_tile >= ground_len {
            return Err(invalid("character_tile", "must leave a tile to its right"));
        }

        Ok(())
    }

    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ground_len(), 19);
        assert_eq!(tuning.ground_min, 208.0);
        assert_eq!(tuning.ground_max, 256.0);
        assert_eq!(tuning.initial_ground_y, 240.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.25, "visible_tiles": 20 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.25);
        assert_eq!(tuning.visible_tiles, 20);
        assert_eq!(tuning.tile_width, TILE_WIDTH);
        assert_eq!(tuning.ground_change_probability, GROUND_CHANGE_PROBABILITY);
    }

    #[test]
    fn test_rejects_inverted_ground_range() {
        let tuning = Tuning {
            ground_min: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "ground_min", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_probability() {
        let err = Tuning::from_json(r#"{ "ground_change_probability": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid { field: "ground_change_probability", .. }
        ));
    }

    #[test]
    fn test_rejects_character_at_window_edge() {
        let tuning = Tuning {
            visible_tiles: 2,
            lookahead_tiles: 1,
            character_tile: 2,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_overflowing_tile_counts() {
        let err = Tuning::from_json(r#"{ "character_tile": 18446744073709551615 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid { field: "character_tile", reason: "too large" }
        ));

        let err = Tuning::from_json(r#"{ "visible_tiles": 18446744073709551615 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid { field: "visible_tiles", reason: "too large" }
        ));
        let tuning = Tuning {
            visible_tiles: usize::MAX,
            ..Default::default()
        };
        assert_eq!(tuning.ground_len(), usize::MAX);
    }

    #[test]
    fn test_rejects_oversized_window() {
        let tuning = Tuning {
            visible_tiles: MAX_GROUND_TILES,
            lookahead_tiles: 1,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "visible_tiles", .. })
        ));

        let tuning = Tuning {
            visible_tiles: MAX_GROUND_TILES - 1,
            lookahead_tiles: 1,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_tile_width() {
        let tuning = Tuning {
            tile_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "tile_width", .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Tuning::load("/definitely/not/here/tuning.json"),
            Err(TuningError::Io(_))
        ));
    }
}
