//! Vertical collision between the character and the ground
//!
//! The character stands on a fixed tile and is supported by the higher of the
//! two ground samples it overlaps (its own tile and the next one). Using both
//! keeps it from sinking into a step exactly at a tile boundary.

use super::ground::GroundWindow;
use super::state::CharacterState;

/// Lowest `y` the character may reach while standing on `tile`
///
/// Larger `y` is lower on screen, so the supporting surface is the smaller
/// of the two samples.
pub fn support_height(ground: &GroundWindow, tile: usize, tile_height: f32) -> Option<f32> {
    let here = ground.get(tile)?;
    let next = ground.get(tile + 1)?;
    Some(here.min(next) - tile_height)
}

/// Clamp the character onto the ground if it reached or passed it
///
/// Landing is fully inelastic: velocity drops to zero. Returns true when the
/// clamp applied.
pub fn clamp_to_ground(
    character: &mut CharacterState,
    ground: &GroundWindow,
    tile: usize,
    tile_height: f32,
) -> bool {
    let Some(max_y) = support_height(ground, tile, tile_height) else {
        return false;
    };
    if character.y >= max_y {
        character.y = max_y;
        character.v = 0.0;
        true
    } else {
        false
    }
}
