use crate::core::{Aabb, Vector};

use super::body::PhysicsComponent;

/// Playable area plus the gravity applied to every component
///
/// The world is plain configuration: it is copied into each
/// [`PhysicsComponent`] at construction and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    /// Horizontal extent and floor of the playable area
    bounds: Aabb,

    /// Constant acceleration applied to components (y grows downward)
    gravity: Vector,
}

impl World {
    /// Create a world from its bounds and gravity
    pub const fn new(bounds: Aabb, gravity: Vector) -> Self {
        Self { bounds, gravity }
    }

    /// Gravity vector
    pub fn gravity(&self) -> Vector {
        self.gravity
    }

    /// Y coordinate of the floor
    pub fn floor(&self) -> f32 {
        self.bounds.bottom()
    }

    /// Clip a component against the world bounds
    ///
    /// Horizontal overlap clamps the position and zeroes horizontal velocity.
    /// Overlap with the floor clamps the position, zeroes vertical velocity,
    /// snaps the acceleration back to gravity and marks the component as
    /// touching the ground. There is no ceiling.
    pub fn resolve(&self, component: &mut PhysicsComponent) {
        let size = component.size();
        let mut position = component.position();
        let mut velocity = component.velocity();

        if position.x < self.bounds.left() {
            position.x = self.bounds.left();
            velocity.x = 0.0;
        } else if position.x + size.x > self.bounds.right() {
            position.x = self.bounds.right() - size.x;
            velocity.x = 0.0;
        }

        let floor = self.floor();
        let grounded = position.y + size.y > floor;
        if grounded {
            position.y = floor - size.y;
            velocity.y = 0.0;
        }

        component.set_position(position);
        component.set_velocity(velocity);

        if grounded {
            component.set_acceleration(self.gravity);
            component.set_ground_contact();
        }
    }
}
