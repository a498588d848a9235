//! Player/hazard collision detection
//!
//! Hitboxes only, never bounding boxes - the inset margins are what make
//! near misses feel fair. The scan short-circuits on the first overlap since
//! one hit already ends the run.

use super::hazard::Hazard;
use super::rect::Rect;

/// Index of the first hazard whose hitbox overlaps the player's, if any
pub fn first_hit(player_hitbox: &Rect, hazards: &[Hazard]) -> Option<usize> {
    hazards
        .iter()
        .position(|h| player_hitbox.intersects(&h.hitbox))
}
