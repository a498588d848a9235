//! Game session state
//!
//! One `GameSession` value owns everything a run mutates, so reset replaces
//! state atomically instead of touching scattered globals. The hazard and
//! cloud vectors are the two explicit views over the world: hazards are the
//! collidable set, clouds render but never collide.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hazard::{Cloud, Hazard};
use super::player::Player;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay: entities move, spawns roll, score accrues
    Running,
    /// Run ended: world frozen in place until an explicit reset
    GameOver,
}

/// Events emitted by a tick for the platform layer to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A hazard hit the player this tick
    GameOver { score: u64 },
    /// The persisted high score must be rewritten to this value
    HighScore(u64),
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed, kept for logging/reproduction
    pub seed: u64,
    pub phase: Phase,
    pub player: Player,
    /// Collidable hazards, in spawn order (last = rightmost)
    pub hazards: Vec<Hazard>,
    /// Decorative clouds, never checked for collision
    pub clouds: Vec<Cloud>,
    /// Monotonic while Running, +1 per tick
    pub score: u64,
    /// Best score across sessions; updated live on overtake
    pub high_score: u64,
    /// Cosmetic ground-texture scroll, in (-PLAYFIELD_WIDTH, 0]
    pub ground_offset: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Whether this run has already beaten the stored high score
    pub(crate) overtaken: bool,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// New session with a fresh player and a previously persisted high score
    pub fn new(seed: u64, high_score: u64) -> Self {
        Self {
            seed,
            phase: Phase::Running,
            player: Player::new(),
            hazards: Vec::new(),
            clouds: Vec::new(),
            score: 0,
            high_score,
            ground_offset: 0.0,
            time_ticks: 0,
            overtaken: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restart after game over: empty world, fresh player, zero score. The
    /// high score and the RNG stream carry over.
    pub fn reset(&mut self) {
        self.phase = Phase::Running;
        self.player = Player::new();
        self.hazards.clear();
        self.clouds.clear();
        self.score = 0;
        self.ground_offset = 0.0;
        self.overtaken = false;
        log::info!("session reset (high score {})", self.high_score);
    }

    /// Advance the cosmetic ground scroll one tick
    pub(crate) fn scroll_ground(&mut self) {
        self.ground_offset -= OBSTACLE_SPEED;
        if self.ground_offset <= -PLAYFIELD_WIDTH {
            self.ground_offset = 0.0;
        }
    }
}
