//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
///
/// Interleaved `[x, y, r, g, b, a]` as `f32`, 24 bytes per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Fixed colors for avatar details and scenery
pub mod colors {
    use crate::{rgb, rgba};

    pub const CLOUD: [f32; 4] = rgba(0xffffff, 0.7);
    pub const GROUND_DETAIL: [f32; 4] = rgb(0x3d291a);
    pub const WING: [f32; 4] = rgb(0xffcc00);
    pub const EYE: [f32; 4] = rgb(0x000000);
    pub const BEAK: [f32; 4] = rgb(0xff9500);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = Vertex::new(1.0, 2.0, colors::BEAK);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(&floats[..2], &[1.0, 2.0]);
        assert_eq!(&floats[2..], &colors::BEAK);
    }
}
