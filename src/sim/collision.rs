//! Axis-aligned collision primitives
//!
//! The play field is rectangular and every collider (bricks, paddle) is an
//! axis-aligned box, so collision detection is plain AABB containment
//! against the ball center. Reflections are sign flips, not exact
//! angle-of-incidence bounces - matching classic breakout behavior.

use glam::Vec2;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from top-left corner plus extent
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Whether a point lies inside (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Reflect a velocity vector off a surface with the given normal
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains() {
        let b = Aabb::from_rect(10.0, 20.0, 30.0, 40.0);

        assert!(b.contains(Vec2::new(25.0, 40.0)));
        // Edges are inclusive
        assert!(b.contains(Vec2::new(10.0, 20.0)));
        assert!(b.contains(Vec2::new(40.0, 60.0)));

        assert!(!b.contains(Vec2::new(9.9, 40.0)));
        assert!(!b.contains(Vec2::new(25.0, 60.1)));
    }

    #[test]
    fn test_aabb_extents() {
        let b = Aabb::from_rect(0.0, 0.0, 75.0, 20.0);
        assert!((b.width() - 75.0).abs() < f32::EPSILON);
        assert!((b.height() - 20.0).abs() < f32::EPSILON);
        assert_eq!(b.center(), Vec2::new(37.5, 10.0));
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let velocity = Vec2::new(120.0, -160.0);
        let reflected = reflect_velocity(velocity, Vec2::new(0.0, 1.0));
        assert!((reflected.length() - velocity.length()).abs() < 0.001);
        assert!((reflected.x - 120.0).abs() < 0.001);
        assert!((reflected.y - 160.0).abs() < 0.001);
    }
}
