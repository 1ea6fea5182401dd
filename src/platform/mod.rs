//! Platform abstraction layer
//!
//! Browser bindings for the render surface. Storage lives in
//! `persistence`; input wiring lives in the binary.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// CSS color string for an RGBA color
pub fn css_color(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rgb, rgba};

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(rgb(0xffdd59)), "rgba(255, 221, 89, 1)");
        assert_eq!(css_color(rgba(0xffffff, 0.7)), "rgba(255, 255, 255, 0.7)");
    }
}
