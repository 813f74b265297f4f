// Geometry primitives shared by the world and physics components

use glam::Vec2;

/// 2D float pair with componentwise add/sub/scale
pub type Vector = Vec2;

/// Axis-aligned bounding box
///
/// `size` may be negative on an axis, in which case the box extends from
/// `position` towards the negative direction. The world uses this to put its
/// floor a few pixels above the bottom of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner (screen space, y grows downward)
    pub position: Vector,
    /// Width and height
    pub size: Vector,
}

impl Aabb {
    /// Create a box from its corner and size
    pub const fn new(position: Vector, size: Vector) -> Self {
        Self { position, size }
    }

    /// X coordinate of the left edge
    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// X coordinate of the right edge (`x + width`)
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Y coordinate of the bottom edge (`y + height`)
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let aabb = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(aabb.left(), 10.0);
        assert_eq!(aabb.right(), 40.0);
        assert_eq!(aabb.bottom(), 60.0);
    }

    #[test]
    fn test_negative_height_moves_bottom_up() {
        let floor = Aabb::new(Vec2::new(0.0, 480.0), Vec2::new(600.0, -13.0));
        assert_eq!(floor.bottom(), 467.0);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -1.0);
        assert_eq!(a + b, Vector::new(4.0, 1.0));
        assert_eq!(a - b, Vector::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0));
    }
}
