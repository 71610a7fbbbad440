//! Scrolling pipe obstacles
//!
//! Pipes spawn at the right edge, all scroll left at the same speed and are
//! removed once fully off the left edge. Because spawn x and speed are shared,
//! the collection stays sorted left-to-right in spawn order.

use rand::Rng;

use super::collision::mover_obstacle_collision;
use super::mover::Mover;
use crate::Field;
use crate::consts::*;
use crate::tuning::DifficultyProfile;

/// A pipe pair with a gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge of the pipe body
    pub x: f32,
    /// Y of the bottom of the upper pipe
    pub gap_top: f32,
}

impl Obstacle {
    #[inline]
    pub fn gap_bottom(&self, gap_height: f32) -> f32 {
        self.gap_top + gap_height
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Fully past the left edge of the field
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Clamp a raw gap top into `[GAP_MARGIN, height - gap_height - GAP_MARGIN]`.
///
/// On fields too short for both bounds the upper bound wins.
pub fn clamp_gap_top(raw: f32, field_height: f32, gap_height: f32) -> f32 {
    let upper = field_height - gap_height - GAP_MARGIN;
    let mut top = raw;
    if top < GAP_MARGIN {
        top = GAP_MARGIN;
    }
    if top > upper {
        top = upper;
    }
    top
}

/// Whether a pipe spawns on this frame
#[inline]
pub fn is_spawn_frame(frame: u64) -> bool {
    frame % SPAWN_INTERVAL == 0
}

/// Owns every live obstacle
#[derive(Debug, Clone)]
pub struct ObstacleManager {
    obstacles: Vec<Obstacle>,
    gap_height: f32,
    speed: f32,
}

impl ObstacleManager {
    pub fn new(profile: &DifficultyProfile) -> Self {
        Self {
            obstacles: Vec::new(),
            gap_height: profile.gap_height,
            speed: profile.horizontal_speed,
        }
    }

    pub fn gap_height(&self) -> f32 {
        self.gap_height
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Append a new pipe at the right edge with a random gap
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, field: Field) -> Obstacle {
        let half = field.height / 2.0;
        let raw = if half > 0.0 {
            rng.random_range(0.0..half).floor()
        } else {
            0.0
        };
        let obstacle = Obstacle {
            x: field.width,
            gap_top: clamp_gap_top(raw, field.height, self.gap_height),
        };
        log::debug!("Spawned pipe at x={} gap_top={}", obstacle.x, obstacle.gap_top);
        self.obstacles.push(obstacle);
        obstacle
    }

    /// Scroll every pipe by one tick
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.x += self.speed;
        }
    }

    pub fn check_collision(&self, mover: &Mover) -> bool {
        self.obstacles
            .iter()
            .any(|o| mover_obstacle_collision(mover, o, self.gap_height))
    }

    /// Drop pipes that left the screen; returns how many were removed
    pub fn prune_and_score(&mut self) -> u32 {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        (before - self.obstacles.len()) as u32
    }

    /// First pipe the mover hasn't fully passed yet
    pub fn next_ahead_of(&self, mover: &Mover) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|o| o.trailing_edge() > mover.pos.x - mover.radius)
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
