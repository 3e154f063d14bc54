//! Polygon resource owned by every drawable entity
//!
//! A polygon keeps its canonical description (local outline, center, angle,
//! scale) and a cached world-space vertex loop. The cache is only refreshed
//! by `rebuild`, so callers must rebuild after moving or turning the shape
//! and before anything reads `vertices()`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::heading_vector;

/// A closed vertex loop in world space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Center position in world space
    pub center: Vec2,
    /// Orientation (radians)
    pub angle: f32,
    /// Non-uniform scale applied to the local outline
    pub scale: Vec2,
    /// Outline relative to the center, before rotation and scale
    local: Vec<Vec2>,
    /// World-space vertices from the last rebuild
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Polygon from an arbitrary outline given relative to the center
    pub fn from_outline(local: Vec<Vec2>, center: Vec2, angle: f32) -> Self {
        let mut polygon = Self {
            center,
            angle,
            scale: Vec2::ONE,
            vertices: Vec::with_capacity(local.len()),
            local,
        };
        polygon.rebuild();
        polygon
    }

    /// Regular polygon with vertex 0 lying along `angle`
    pub fn regular(sides: usize, center: Vec2, angle: f32, size: f32) -> Self {
        let step = std::f32::consts::TAU / sides as f32;
        let local = (0..sides)
            .map(|i| heading_vector(i as f32 * step) * size)
            .collect();
        Self::from_outline(local, center, angle)
    }

    /// Jagged polygon with evenly spaced vertices whose radii fall in
    /// `[size * (1 - jitter), size]`
    ///
    /// Radii vary but the angular order is fixed, so the loop never
    /// self-intersects.
    pub fn random<R: Rng>(
        sides: usize,
        center: Vec2,
        angle: f32,
        size: f32,
        jitter: f32,
        rng: &mut R,
    ) -> Self {
        let step = std::f32::consts::TAU / sides as f32;
        let local = (0..sides)
            .map(|i| {
                let pull = rng.random::<f32>() * jitter;
                heading_vector(i as f32 * step) * size * (1.0 - pull)
            })
            .collect();
        Self::from_outline(local, center, angle)
    }

    /// Set a uniform scale (call `rebuild` afterwards)
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec2::splat(scale);
    }

    /// Recompute world-space vertices from center, angle and scale
    pub fn rebuild(&mut self) {
        let rotation = Vec2::from_angle(self.angle);
        self.vertices.clear();
        self.vertices.extend(
            self.local
                .iter()
                .map(|&p| self.center + rotation.rotate(p * self.scale)),
        );
    }

    /// World-space vertex loop (valid as of the last `rebuild`)
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Largest distance from the center to a vertex
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.distance(self.center))
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_regular_vertex_zero_is_nose() {
        let tri = Polygon::regular(3, Vec2::new(100.0, 100.0), 0.0, 20.0);
        assert_eq!(tri.vertices().len(), 3);
        assert!((tri.vertices()[0] - Vec2::new(120.0, 100.0)).length() < 1e-4);

        let turned = Polygon::regular(3, Vec2::new(100.0, 100.0), FRAC_PI_2, 20.0);
        assert!((turned.vertices()[0] - Vec2::new(100.0, 120.0)).length() < 1e-3);
    }

    #[test]
    fn test_rebuild_follows_center_and_scale() {
        let mut hex = Polygon::regular(6, Vec2::ZERO, 0.0, 1.0);
        hex.center = Vec2::new(10.0, -5.0);
        hex.set_uniform_scale(3.0);
        // Stale until rebuilt
        assert!((hex.vertices()[0] - Vec2::new(1.0, 0.0)).length() < 1e-4);
        hex.rebuild();
        assert!((hex.vertices()[0] - Vec2::new(13.0, -5.0)).length() < 1e-4);
        assert!((hex.bounding_radius() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_from_outline_keeps_vertex_order() {
        let outline = vec![Vec2::new(2.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-2.0, 0.0)];
        let shape = Polygon::from_outline(outline, Vec2::new(5.0, 5.0), FRAC_PI_2);
        assert_eq!(shape.vertices().len(), 3);
        assert!((shape.vertices()[0] - Vec2::new(5.0, 7.0)).length() < 1e-4);
        assert!((shape.vertices()[1] - Vec2::new(4.0, 5.0)).length() < 1e-4);
        assert!((shape.bounding_radius() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_random_radii_within_jitter_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        let rock = Polygon::random(24, Vec2::ZERO, 0.3, 50.0, 0.3, &mut rng);
        assert_eq!(rock.vertices().len(), 24);
        for v in rock.vertices() {
            let r = v.length();
            assert!(r >= 35.0 - 1e-3 && r <= 50.0 + 1e-3, "radius {r}");
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = Polygon::random(12, Vec2::ZERO, 0.0, 10.0, 0.5, &mut Pcg32::seed_from_u64(42));
        let b = Polygon::random(12, Vec2::ZERO, 0.0, 10.0, 0.5, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
