//! Probabilistic, distance-gated entity spawning
//!
//! One spawn pass runs per RUNNING tick. Ground/air hazards share a single
//! distance gate computed from the newest hazard's right edge, so the player
//! always gets a minimum reaction window. The cactus and bird probabilities
//! are two sequential draws - the bird is only rolled when the cactus roll
//! fails - which mildly undercounts birds relative to an even split; that
//! matches the original balance and is kept on purpose. Cloud spawning is
//! independent of the gate so background pacing doesn't track difficulty.

use rand::Rng;

use super::hazard::{Cloud, Hazard};
use crate::consts::*;

/// Outcome of one spawn pass, applied by the caller
#[derive(Debug, Default)]
pub struct SpawnResult {
    pub hazard: Option<Hazard>,
    pub cloud: Option<Cloud>,
}

/// True when the newest hazard has scrolled far enough from the right edge
/// that another may spawn behind it. Spawn order means the last element of
/// the active set is always the rightmost.
pub fn can_spawn_hazard(hazards: &[Hazard]) -> bool {
    match hazards.last() {
        Some(h) => h.bounds.right() < PLAYFIELD_WIDTH - MIN_OBSTACLE_DISTANCE,
        None => true,
    }
}

/// Run one spawn pass. At most one hazard and at most one cloud result.
pub fn spawn_pass<R: Rng>(rng: &mut R, hazards: &[Hazard]) -> SpawnResult {
    let mut result = SpawnResult::default();

    if can_spawn_hazard(hazards) {
        if rng.random::<f64>() < P_CACTUS {
            result.hazard = Some(Hazard::spawn_cactus(rng));
        } else if rng.random::<f64>() < P_BIRD {
            result.hazard = Some(Hazard::spawn_bird(rng));
        }
    }

    if rng.random::<f64>() < P_CLOUD {
        result.cloud = Some(Cloud::spawn(rng));
    }

    result
}
