//! Rendering module
//!
//! The game draws through a handful of primitives; `draw_frame` decides what
//! goes on screen and in which order. The canvas backend lives in `canvas`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{GamePhase, GameState};

/// Score text (y, font size)
const SCORE_TEXT: (f32, f32) = (50.0, 24.0);
const BEST_TEXT: (f32, f32) = (70.0, 16.0);

/// Drawing primitives, called once per frame
pub trait Renderer {
    fn clear(&mut self);
    fn draw_background(&mut self);
    fn draw_obstacle(&mut self, x: f32, gap_top: f32);
    fn draw_ground(&mut self);
    fn draw_mover(&mut self, x: f32, y: f32);
    fn draw_text(&mut self, content: &str, x: f32, y: f32, size: f32);
}

/// Draw the whole scene: background, pipes, ground, mover, then the live
/// score while playing
pub fn draw_frame(state: &GameState, renderer: &mut impl Renderer) {
    renderer.clear();
    renderer.draw_background();

    for obstacle in state.obstacles.obstacles() {
        renderer.draw_obstacle(obstacle.x, obstacle.gap_top);
    }

    renderer.draw_ground();
    renderer.draw_mover(state.mover.pos.x, state.mover.pos.y);

    if state.phase == GamePhase::Playing {
        let center_x = state.field.width / 2.0;
        renderer.draw_text(&state.score.to_string(), center_x, SCORE_TEXT.0, SCORE_TEXT.1);
        renderer.draw_text(
            &format!("Best: {}", state.best_score),
            center_x,
            BEST_TEXT.0,
            BEST_TEXT.1,
        );
    }
}

/// Renderer that draws nothing (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}
    fn draw_background(&mut self) {}
    fn draw_obstacle(&mut self, _x: f32, _gap_top: f32) {}
    fn draw_ground(&mut self) {}
    fn draw_mover(&mut self, _x: f32, _y: f32) {}
    fn draw_text(&mut self, _content: &str, _x: f32, _y: f32, _size: f32) {}
}
