//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a triangle list in untransformed field units.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle with per-edge colors
pub fn rect_gradient(pos: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Generate vertices for a solid rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    rect_gradient(pos, size, color, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), 0.0, color, segments)
}

/// Generate vertices for a filled, rotated ellipse
pub fn ellipse(
    center: Vec2,
    radii: Vec2,
    rotation: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let rot = Vec2::from_angle(rotation);
    let point = |i: u32| {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        center + rot.rotate(Vec2::new(radii.x * theta.cos(), radii.y * theta.sin()))
    };

    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let p1 = point(i);
        let p2 = point(i + 1);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a convex polygon (triangle fan from the first point)
pub fn polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let first = points[0];
    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(first.x, first.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), WHITE);
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|v| (10.0..=15.0).contains(&v.position[0])));
        assert!(v.iter().all(|v| (20.0..=28.0).contains(&v.position[1])));
    }

    #[test]
    fn test_gradient_colors_follow_edges() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        let v = rect_gradient(Vec2::ZERO, Vec2::new(4.0, 4.0), top, bottom);
        for vertex in v {
            let expected = if vertex.position[1] == 0.0 { top } else { bottom };
            assert_eq!(vertex.color, expected);
        }
    }

    #[test]
    fn test_circle_radius() {
        let center = Vec2::new(50.0, 50.0);
        let v = circle(center, 10.0, WHITE, 16);
        assert_eq!(v.len(), 48);
        for vertex in v {
            let d = Vec2::from(vertex.position).distance(center);
            assert!(d < 1e-3 || (d - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_polygon_fan() {
        let tri = [Vec2::ZERO, Vec2::X, Vec2::Y];
        assert_eq!(polygon(&tri, WHITE).len(), 3);
        let quad = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        assert_eq!(polygon(&quad, WHITE).len(), 6);
        assert!(polygon(&tri[..2], WHITE).is_empty());
    }
}
