//! Collision tests between the mover and pipes
//!
//! The mover is treated as its bounding square (center ± radius) against the
//! pipe body. Pipe heads are wider on screen but don't collide.

use super::mover::Mover;
use super::obstacles::Obstacle;
use crate::consts::PIPE_WIDTH;

/// Horizontal overlap between the mover and a pipe body
#[inline]
pub fn overlaps_horizontally(mover: &Mover, obstacle: &Obstacle) -> bool {
    mover.pos.x + mover.radius > obstacle.x && mover.pos.x - mover.radius < obstacle.x + PIPE_WIDTH
}

/// True when any part of the mover sticks out of the gap vertically
#[inline]
pub fn outside_gap(mover: &Mover, obstacle: &Obstacle, gap_height: f32) -> bool {
    mover.top() < obstacle.gap_top || mover.bottom() > obstacle.gap_bottom(gap_height)
}

/// Mover hits the upper or lower pipe of this obstacle
pub fn mover_obstacle_collision(mover: &Mover, obstacle: &Obstacle, gap_height: f32) -> bool {
    overlaps_horizontally(mover, obstacle) && outside_gap(mover, obstacle, gap_height)
}
