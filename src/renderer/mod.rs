//! Rendering module
//!
//! The scene is drawn onto an abstract 2D surface in field units
//! (400 x 600, y down). Hosts provide the surface: a browser canvas on
//! wasm32, or the tessellating `VertexSurface` for headless frame capture.

pub mod scene;
pub mod shapes;
pub mod tessellator;
pub mod vertex;

use glam::Vec2;

pub use scene::{SceneView, draw};
pub use tessellator::VertexSurface;
pub use vertex::Vertex;

/// RGBA, components in [0, 1]
pub type Color = [f32; 4];

/// Immediate-mode 2D drawing target
///
/// Mirrors the subset of a canvas context the game needs: solid fills, a
/// vertical gradient fill, a transform stack and a global alpha.
pub trait RenderSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    /// Rectangle shaded from `top` to `bottom`
    fn fill_rect_gradient(&mut self, pos: Vec2, size: Vec2, top: Color, bottom: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Ellipse with semi-axes `radii`, rotated by `rotation` radians
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Color);
    /// Closed convex polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Push the current transform and alpha
    fn save(&mut self);
    /// Pop back to the last `save`
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    /// Multiplied into every subsequent fill
    fn set_global_alpha(&mut self, alpha: f32);
}
