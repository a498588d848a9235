//! Axis-aligned rectangles for bounding boxes and hitboxes
//!
//! Screen coordinates: y grows downward, so `top < bottom`. Every entity
//! carries a visual bounding box plus a smaller hitbox derived from it by a
//! fixed per-pose inset; collision always uses the hitbox.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, position is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Per-edge shrink amounts used to derive a hitbox from a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Place a rect of the given size with its bottom-left corner at (x, bottom)
    pub fn from_bottom_left(x: f32, bottom: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y: bottom - h,
            w,
            h,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Move by (dx, dy)
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Slide vertically so the bottom edge lands on `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Shrink by per-edge insets. Degenerate results clamp to zero size so a
    /// bad inset can never produce an inside-out box.
    pub fn inset(&self, insets: Insets) -> Rect {
        let w = (self.w - insets.left - insets.right).max(0.0);
        let h = (self.h - insets.top - insets.bottom).max(0.0);
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            w,
            h,
        }
    }

    /// Strict AABB overlap test; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies entirely inside `self` (edges allowed)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// True when the point lies inside (edges allowed)
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}
