//! Scrolling world entities: cacti, birds and decorative clouds
//!
//! Hazards spawn with their left edge at the playfield's right boundary,
//! translate left at the shared obstacle speed and mark themselves for
//! removal once fully off screen. Clouds are not hazards: they drift slower,
//! never collide and wrap back to the right edge instead of dying.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::{Insets, Rect};
use crate::consts::*;

/// Cactus size variant, picked uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CactusSize {
    Small,
    Large,
}

impl CactusSize {
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            CactusSize::Small => CACTUS_SMALL_SIZE,
            CactusSize::Large => CACTUS_LARGE_SIZE,
        }
    }
}

/// Bird altitude, picked uniformly at spawn. Low demands a duck or a jump;
/// High passes clean over a standing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightLevel {
    Low,
    High,
}

impl FlightLevel {
    /// Screen-space y of the bird's bottom edge
    pub fn bottom(self) -> f32 {
        match self {
            FlightLevel::Low => BIRD_LOW_BOTTOM,
            FlightLevel::High => BIRD_HIGH_BOTTOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Cactus(CactusSize),
    Bird { flight: FlightLevel },
}

/// A collidable obstacle scrolling in from the right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    pub bounds: Rect,
    pub hitbox: Rect,
    /// Wing flap frame in [0, BIRD_FRAME_COUNT); unused for cacti
    pub anim_frame: u8,
    anim_timer: u32,
}

impl Hazard {
    /// Spawn a cactus at the right edge with a uniformly random size variant
    pub fn spawn_cactus<R: Rng>(rng: &mut R) -> Self {
        let size = if rng.random::<bool>() {
            CactusSize::Small
        } else {
            CactusSize::Large
        };
        let (w, h) = size.dimensions();
        Self::with_bounds(
            HazardKind::Cactus(size),
            Rect::from_bottom_left(PLAYFIELD_WIDTH, GROUND_HEIGHT, w, h),
        )
    }

    /// Spawn a bird at the right edge with a uniformly random flight level
    pub fn spawn_bird<R: Rng>(rng: &mut R) -> Self {
        let flight = if rng.random::<bool>() {
            FlightLevel::Low
        } else {
            FlightLevel::High
        };
        let (w, h) = BIRD_SIZE;
        Self::with_bounds(
            HazardKind::Bird { flight },
            Rect::from_bottom_left(PLAYFIELD_WIDTH, flight.bottom(), w, h),
        )
    }

    fn with_bounds(kind: HazardKind, bounds: Rect) -> Self {
        let mut hazard = Self {
            kind,
            bounds,
            hitbox: Rect::default(),
            anim_frame: 0,
            anim_timer: 0,
        };
        hazard.update_hitbox();
        hazard
    }

    /// Scroll left one tick and advance the wing flap for birds
    pub fn update(&mut self) {
        self.bounds.translate(-OBSTACLE_SPEED, 0.0);
        self.update_hitbox();

        if let HazardKind::Bird { .. } = self.kind {
            self.anim_timer += 1;
            if self.anim_timer >= BIRD_FRAME_PERIOD {
                self.anim_timer = 0;
                self.anim_frame = (self.anim_frame + 1) % BIRD_FRAME_COUNT;
            }
        }
    }

    /// Fully past the left edge; the owner drops it from the active set
    pub fn off_screen(&self) -> bool {
        self.bounds.right() < 0.0
    }

    fn update_hitbox(&mut self) {
        self.hitbox = self.bounds.inset(self.hitbox_insets());
    }

    fn hitbox_insets(&self) -> Insets {
        match self.kind {
            // Cacti are dense; only forgive the spiky fringe
            HazardKind::Cactus(_) => Insets {
                left: 2.0,
                right: 2.0,
                top: 3.0,
                bottom: 0.0,
            },
            // Wingtips don't hurt
            HazardKind::Bird { .. } => Insets {
                left: 4.0,
                right: 4.0,
                top: 6.0,
                bottom: 4.0,
            },
        }
    }
}

/// Decorative wrap-around scroller; never collides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub bounds: Rect,
}

impl Cloud {
    /// Spawn with the bottom-left corner at a random offset past the right edge
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let x = rng.random_range(PLAYFIELD_WIDTH..=PLAYFIELD_WIDTH + CLOUD_SPAWN_SPREAD);
        let (w, h) = CLOUD_SIZE;
        Self {
            bounds: Rect::from_bottom_left(x, CLOUD_HEIGHT, w, h),
        }
    }

    /// Drift left; wrap to the right edge instead of despawning
    pub fn update(&mut self) {
        self.bounds.translate(-CLOUD_SPEED, 0.0);
        if self.bounds.right() < 0.0 {
            self.bounds.x = PLAYFIELD_WIDTH;
        }
    }
}
