/*
 * Boundary Module
 *
 * This module defines the closed polygon bounding the horizontal extent of
 * the world, with a nearest-edge query returning both the distance and the
 * outward normal at the closest point. The vertical (ceiling/floor) bounds
 * are handled separately by scalar checks in the physics step; that
 * asymmetry is part of the simulation's behavior.
 */

use glam::Vec2;

pub struct Boundary {
    vertices: Vec<Vec2>,
}

impl Boundary {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    // Axis-aligned square of the given half extent, the shape used by the
    // aquarium scene.
    pub fn square(half_extent: f32) -> Self {
        Self::new(vec![
            Vec2::new(-half_extent, -half_extent),
            Vec2::new(half_extent, -half_extent),
            Vec2::new(half_extent, half_extent),
            Vec2::new(-half_extent, half_extent),
        ])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    // Minimum distance from the point to any edge of the polygon (wraparound
    // included) together with the unit vector from the nearest edge point
    // toward the query point.
    pub fn nearest_edge(&self, point: Vec2) -> (f32, Vec2) {
        let mut min_distance = f32::MAX;
        let mut closest_normal = Vec2::ZERO;

        for (i, &v) in self.vertices.iter().enumerate() {
            let w = self.vertices[(i + 1) % self.vertices.len()];
            let (distance, normal) = distance_to_segment(point, v, w);
            if distance < min_distance {
                min_distance = distance;
                closest_normal = normal;
            }
        }

        (min_distance, closest_normal)
    }
}

// Perpendicular-foot distance from p to the segment (v, w), clamping the
// projection parameter to [0, 1] so points beyond the endpoints measure to
// the nearest endpoint. Zero-length segments fall back to point-to-point.
fn distance_to_segment(p: Vec2, v: Vec2, w: Vec2) -> (f32, Vec2) {
    let l2 = (w - v).length_squared();
    if l2 == 0.0 {
        let diff = p - v;
        return (diff.length(), diff.normalize_or_zero());
    }
    let t = ((p - v).dot(w - v) / l2).clamp(0.0, 1.0);
    let projection = v + (w - v) * t;
    let diff = p - projection;
    (diff.length(), diff.normalize_or_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Boundary {
        Boundary::square(0.5)
    }

    #[test]
    fn center_of_unit_square() {
        let (distance, normal) = unit_square().nearest_edge(Vec2::ZERO);
        assert!((distance - 0.5).abs() < 1e-6);
        assert!((normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn near_each_edge_midpoint() {
        let boundary = unit_square();
        let probes = [
            (Vec2::new(0.0, -0.4), Vec2::new(0.0, 1.0)),
            (Vec2::new(0.4, 0.0), Vec2::new(-1.0, 0.0)),
            (Vec2::new(0.0, 0.4), Vec2::new(0.0, -1.0)),
            (Vec2::new(-0.4, 0.0), Vec2::new(1.0, 0.0)),
        ];
        for (point, inward) in probes {
            let (distance, normal) = boundary.nearest_edge(point);
            assert!((distance - 0.1).abs() < 1e-6);
            assert!((normal.length() - 1.0).abs() < 1e-6);
            // Normal points from the wall back toward the interior probe
            assert!(normal.dot(inward) > 0.99);
        }
    }

    #[test]
    fn near_a_corner() {
        let (distance, normal) = unit_square().nearest_edge(Vec2::new(0.45, 0.45));
        assert!((distance - 0.05).abs() < 1e-6);
        assert!((normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn projection_clamps_beyond_segment_endpoints() {
        // Point past the end of a lone segment measures to the endpoint
        let (distance, normal) = distance_to_segment(
            Vec2::new(2.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
        );
        assert!((distance - 2.0_f32.sqrt()).abs() < 1e-6);
        assert!((normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_length_segment_falls_back_to_point_direction() {
        let (distance, normal) =
            distance_to_segment(Vec2::new(3.0, 4.0), Vec2::ZERO, Vec2::ZERO);
        assert!((distance - 5.0).abs() < 1e-6);
        assert!((normal - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn point_on_the_edge_yields_zero_normal_not_nan() {
        let (distance, normal) = unit_square().nearest_edge(Vec2::new(0.5, 0.0));
        assert_eq!(distance, 0.0);
        assert!(normal.is_finite());
    }
}
