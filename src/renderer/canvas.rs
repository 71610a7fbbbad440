//! HTML canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use crate::Field;
use crate::consts::*;

const SKY_TOP: &str = "#87CEEB";
const SKY_BOTTOM: &str = "#E0F6FF";
const PIPE_COLOR: &str = "#228B22";
const GROUND_COLOR: &str = "#ded895";
const COIN_COLOR: &str = "#f2c12e";
const COIN_RIM: &str = "#b8860b";
const TEXT_COLOR: &str = "#333";

/// Coin sprite is drawn a bit larger than the collision radius
const COIN_DRAW_RADIUS: f64 = 20.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    field: Field,
    gap_height: f32,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas`; None if the browser refuses
    pub fn new(canvas: &HtmlCanvasElement, gap_height: f32) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let field = Field::new(canvas.width() as f32, canvas.height() as f32);
        Some(Self {
            ctx,
            field,
            gap_height,
        })
    }

    pub fn field(&self) -> Field {
        self.field
    }

    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.field.width as f64,
            self.field.height as f64,
        );
    }

    fn draw_background(&mut self) {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, self.field.height as f64);
        gradient.add_color_stop(0.0, SKY_TOP).ok();
        gradient.add_color_stop(1.0, SKY_BOTTOM).ok();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.fill_rect(0.0, 0.0, self.field.width, self.field.height);
    }

    fn draw_obstacle(&mut self, x: f32, gap_top: f32) {
        self.ctx.set_fill_style_str(PIPE_COLOR);
        let head_x = x - (PIPE_HEAD_WIDTH - PIPE_WIDTH) / 2.0;
        let gap_bottom = gap_top + self.gap_height;

        // Upper pipe body and lip
        self.fill_rect(x, 0.0, PIPE_WIDTH, gap_top);
        self.fill_rect(head_x, gap_top, PIPE_HEAD_WIDTH, PIPE_HEAD_HEIGHT);

        // Lower pipe body and lip
        self.fill_rect(x, gap_bottom, PIPE_WIDTH, self.field.height);
        self.fill_rect(head_x, gap_bottom, PIPE_HEAD_WIDTH, PIPE_HEAD_HEIGHT);
    }

    fn draw_ground(&mut self) {
        self.ctx.set_fill_style_str(GROUND_COLOR);
        self.fill_rect(0.0, self.field.ground_y(), self.field.width, GROUND_HEIGHT);
    }

    fn draw_mover(&mut self, x: f32, y: f32) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, COIN_DRAW_RADIUS, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(COIN_COLOR);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(COIN_RIM);
        self.ctx.set_line_width(3.0);
        self.ctx.stroke();
    }

    fn draw_text(&mut self, content: &str, x: f32, y: f32, size: f32) {
        self.ctx.set_fill_style_str(TEXT_COLOR);
        self.ctx.set_font(&format!("{}px Arial", size));
        self.ctx.set_text_align("center");
        self.ctx.fill_text(content, x as f64, y as f64).ok();
    }
}
