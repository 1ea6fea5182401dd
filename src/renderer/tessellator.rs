//! Render surface that tessellates into a vertex list
//!
//! Used by the native host to capture frames headlessly. Transforms are
//! applied on the CPU so the buffer is ready to draw in field units.

use std::io::{self, Write};

use glam::{Affine2, Vec2};

use super::shapes;
use super::vertex::Vertex;
use super::{Color, RenderSurface};

/// Triangles per full circle or ellipse
pub const CIRCLE_SEGMENTS: u32 = 24;

#[derive(Debug, Clone, Copy)]
struct DrawState {
    transform: Affine2,
    alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            alpha: 1.0,
        }
    }
}

/// Accumulates one frame of triangles
#[derive(Debug, Clone, Default)]
pub struct VertexSurface {
    vertices: Vec<Vertex>,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.state = DrawState::default();
        self.stack.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw interleaved vertex bytes for the current frame
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Dump the frame's vertex bytes, e.g. to a capture file
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.as_bytes())?;
        out.flush()
    }

    /// Unbalanced `save` calls still open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, shape: Vec<Vertex>) {
        let DrawState { transform, alpha } = self.state;
        self.vertices.extend(shape.into_iter().map(|mut v| {
            let p = transform.transform_point2(Vec2::from(v.position));
            v.position = p.to_array();
            v.color[3] *= alpha;
            v
        }));
    }
}

impl RenderSurface for VertexSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.push(shapes::rect(pos, size, color));
    }

    fn fill_rect_gradient(&mut self, pos: Vec2, size: Vec2, top: Color, bottom: Color) {
        self.push(shapes::rect_gradient(pos, size, top, bottom));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Color) {
        self.push(shapes::ellipse(
            center,
            radii,
            rotation,
            color,
            CIRCLE_SEGMENTS,
        ));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.push(shapes::polygon(points, color));
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(radians);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_then_rotate() {
        let mut surface = VertexSurface::new();
        surface.save();
        surface.translate(Vec2::new(100.0, 50.0));
        surface.rotate(std::f32::consts::FRAC_PI_2);
        surface.fill_polygon(&[Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)], [1.0; 4]);
        surface.restore();

        let v = surface.vertices();
        assert_eq!(v.len(), 3);
        // Local +x maps to field +y after a quarter turn
        assert!((v[1].position[0] - 100.0).abs() < 1e-4);
        assert!((v[1].position[1] - 60.0).abs() < 1e-4);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_global_alpha_scales_color() {
        let mut surface = VertexSurface::new();
        surface.set_global_alpha(0.5);
        surface.fill_rect(Vec2::ZERO, Vec2::ONE, [1.0, 1.0, 1.0, 0.8]);
        assert!(surface.vertices().iter().all(|v| (v.color[3] - 0.4).abs() < 1e-6));
        assert_eq!(surface.as_bytes().len(), 6 * std::mem::size_of::<Vertex>());
    }

    #[test]
    fn test_restore_resets_alpha() {
        let mut surface = VertexSurface::new();
        surface.save();
        surface.set_global_alpha(0.2);
        surface.restore();
        surface.fill_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        assert_eq!(surface.vertices()[0].color[3], 1.0);
    }

    #[test]
    fn test_write_to_dumps_frame_bytes() {
        let mut surface = VertexSurface::new();
        surface.fill_rect(Vec2::new(10.0, 20.0), Vec2::splat(5.0), [0.0, 0.5, 1.0, 1.0]);
        let mut out = Vec::new();
        surface.write_to(&mut out).unwrap();
        assert_eq!(out.len(), 6 * 24);
        assert_eq!(out.as_slice(), surface.as_bytes());

        surface.clear();
        let mut empty = Vec::new();
        surface.write_to(&mut empty).unwrap();
        assert!(empty.is_empty());
    }
}
