//! Canvas 2D render surface

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::css_color;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::renderer::{Color, RenderSurface};

/// Draws straight onto a `<canvas>` 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to a canvas and size it to the logical field
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn fill_path(&self, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
    }
}

impl RenderSurface for CanvasSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_rect_gradient(&mut self, pos: Vec2, size: Vec2, top: Color, bottom: Color) {
        let gradient = self.ctx.create_linear_gradient(
            0.0,
            pos.y as f64,
            0.0,
            (pos.y + size.y) as f64,
        );
        if gradient.add_color_stop(0.0, &css_color(top)).is_err()
            || gradient.add_color_stop(1.0, &css_color(bottom)).is_err()
        {
            log::warn!("Gradient stop rejected; filling flat");
            self.fill_rect(pos, size, top);
            return;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.fill_path(color);
        }
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Color) {
        self.ctx.begin_path();
        if self
            .ctx
            .ellipse(
                center.x as f64,
                center.y as f64,
                radii.x as f64,
                radii.y as f64,
                rotation as f64,
                0.0,
                TAU,
            )
            .is_ok()
        {
            self.fill_path(color);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.fill_path(color);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }
}
