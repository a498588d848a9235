//! Player locomotion state machine
//!
//! The player never moves horizontally; the world scrolls past a fixed
//! anchor. Vertical motion is constant-acceleration gravity clamped to the
//! ground line. Pose (standing vs ducking) is a lookup key that determines
//! sprite size, hitbox insets and whether the run cycle animates - the
//! bounding box is re-derived from the pose rather than mutated ad hoc.

use serde::{Deserialize, Serialize};

use super::rect::{Insets, Rect};
use crate::consts::*;

/// Locomotion pose, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pose {
    #[default]
    Standing,
    Ducking,
}

impl Pose {
    /// Sprite (bounding box) dimensions for this pose
    pub fn size(self) -> (f32, f32) {
        match self {
            Pose::Standing => PLAYER_STAND_SIZE,
            Pose::Ducking => PLAYER_DUCK_SIZE,
        }
    }

    /// Hitbox insets for this pose. Horizontally biased toward the trailing
    /// edge; the snout sticking out front doesn't count as body.
    pub fn hitbox_insets(self) -> Insets {
        match self {
            Pose::Standing => Insets {
                left: 6.0,
                right: 14.0,
                top: 8.0,
                bottom: 0.0,
            },
            Pose::Ducking => Insets {
                left: 8.0,
                right: 18.0,
                top: 5.0,
                bottom: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pose: Pose,
    pub bounds: Rect,
    pub hitbox: Rect,
    /// Vertical velocity in px/tick, negative = upward
    pub velocity: f32,
    /// Run cycle frame in [0, RUN_FRAME_COUNT)
    pub anim_frame: u8,
    anim_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Player at the initial standing pose, feet on the ground
    pub fn new() -> Self {
        let (w, h) = Pose::Standing.size();
        let bounds = Rect::from_bottom_left(PLAYER_X, GROUND_HEIGHT, w, h);
        let mut player = Self {
            pose: Pose::Standing,
            bounds,
            hitbox: Rect::default(),
            velocity: 0.0,
            anim_frame: 0,
            anim_timer: 0,
        };
        player.update_hitbox();
        player
    }

    /// True when the feet rest exactly on the ground line
    pub fn grounded(&self) -> bool {
        self.bounds.bottom() >= GROUND_HEIGHT
    }

    /// Integrate gravity and clamp to the ground. Runs every tick regardless
    /// of pose; landing zeroes the velocity.
    pub fn apply_gravity(&mut self) {
        self.velocity += GRAVITY_ACCEL;
        self.bounds.translate(0.0, self.velocity);
        if self.bounds.bottom() > GROUND_HEIGHT {
            self.bounds.set_bottom(GROUND_HEIGHT);
            self.velocity = 0.0;
        }
        self.update_hitbox();
    }

    /// Start a jump. No-op while airborne or ducking (no double jump).
    pub fn jump(&mut self) {
        if self.grounded() && self.pose == Pose::Standing {
            self.velocity = JUMP_VELOCITY;
        }
    }

    /// Enter the ducking pose, preserving the bottom-left anchor. Idempotent
    /// while held; kills any vertical motion.
    pub fn duck(&mut self) {
        if self.pose == Pose::Ducking {
            return;
        }
        self.set_pose(Pose::Ducking);
        self.velocity = 0.0;
    }

    /// Leave the ducking pose, restoring standing dimensions at the same
    /// bottom-left anchor. No-op while standing.
    pub fn stand(&mut self) {
        if self.pose == Pose::Standing {
            return;
        }
        self.set_pose(Pose::Standing);
    }

    /// Advance the run cycle. Only grounded, standing players animate;
    /// airborne and ducking frames are fixed sprites.
    pub fn tick_animation(&mut self) {
        if !self.grounded() || self.pose != Pose::Standing {
            return;
        }
        self.anim_timer += 1;
        if self.anim_timer >= RUN_FRAME_PERIOD {
            self.anim_timer = 0;
            self.anim_frame = (self.anim_frame + 1) % RUN_FRAME_COUNT;
        }
    }

    fn set_pose(&mut self, pose: Pose) {
        let anchor_x = self.bounds.left();
        let anchor_bottom = self.bounds.bottom();
        let (w, h) = pose.size();
        self.pose = pose;
        self.bounds = Rect::from_bottom_left(anchor_x, anchor_bottom, w, h);
        self.update_hitbox();
    }

    fn update_hitbox(&mut self) {
        self.hitbox = self.bounds.inset(self.pose.hitbox_insets());
    }
}
