//! The player-controlled falling coin

use glam::Vec2;

use crate::consts::*;

/// The mover. Horizontal position never changes; only y and velocity do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub velocity: f32,
    pub radius: f32,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            pos: Vec2::new(MOVER_X, MOVER_START_Y),
            velocity: 0.0,
            radius: MOVER_RADIUS,
        }
    }
}

impl Mover {
    /// Integrate one tick of gravity
    #[inline]
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.pos.y += self.velocity;
    }

    /// Instantaneous upward impulse; replaces the current velocity
    #[inline]
    pub fn flap(&mut self, jump_impulse: f32) {
        self.velocity = -jump_impulse;
    }

    #[inline]
    pub fn has_hit_ground(&self, ground_y: f32) -> bool {
        self.pos.y + self.radius >= ground_y
    }

    /// Rest the mover on the ground line
    pub fn settle_on_ground(&mut self, ground_y: f32) {
        self.pos.y = ground_y - self.radius;
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}
