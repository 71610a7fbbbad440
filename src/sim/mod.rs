//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall clock
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod mover;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::mover_obstacle_collision;
pub use mover::Mover;
pub use obstacles::{Obstacle, ObstacleManager, clamp_gap_top, is_spawn_frame};
pub use state::{Cue, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, autopilot_wants_flap, tick};
