use crate::core::{Aabb, Vector};
use glam::Vec2;

use super::world::World;

/// Axis-aligned box moved by semi-implicit Euler integration
#[derive(Debug, Clone)]
pub struct PhysicsComponent {
    /// Position and size
    aabb: Aabb,
    /// Displacement per tick
    velocity: Vector,
    /// Change of velocity per tick
    acceleration: Vector,
    /// World the component is clipped against
    world: World,
    /// Set by the world when the component rests on the floor
    ground: bool,
}

impl PhysicsComponent {
    /// Create a component at the origin, at rest, falling under the world's gravity
    pub fn new(world: World, size: Vector) -> Self {
        Self {
            aabb: Aabb::new(Vec2::ZERO, size),
            velocity: Vec2::ZERO,
            acceleration: world.gravity(),
            world,
            ground: false,
        }
    }

    /// Set the initial position
    pub fn with_position(mut self, position: Vector) -> Self {
        self.aabb.position = position;
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial acceleration (gravity until the first floor contact)
    pub fn with_acceleration(mut self, acceleration: Vector) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Advance the component by one tick
    pub fn update(&mut self) {
        self.ground = false;
        self.velocity += self.acceleration;
        self.aabb.position += self.velocity;

        let world = self.world;
        world.resolve(self);
    }

    /// Whether the last update ended in contact with the floor
    pub fn is_on_ground(&self) -> bool {
        self.ground
    }

    pub fn position(&self) -> Vector {
        self.aabb.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector {
        self.acceleration
    }

    pub fn size(&self) -> Vector {
        self.aabb.size
    }

    /// Move horizontally without touching velocity (walk displacement)
    pub fn translate_x(&mut self, dx: f32) {
        self.aabb.position.x += dx;
    }

    /// Add an impulse to the velocity
    pub fn add_velocity(&mut self, dv: Vector) {
        self.velocity += dv;
    }

    pub(super) fn set_position(&mut self, position: Vector) {
        self.aabb.position = position;
    }

    pub(super) fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    pub(super) fn set_acceleration(&mut self, acceleration: Vector) {
        self.acceleration = acceleration;
    }

    pub(super) fn set_ground_contact(&mut self) {
        self.ground = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PLAYER_SIZE: Vec2 = Vec2::new(186.0, 148.0);

    fn world() -> World {
        let bounds = Aabb::new(Vec2::new(0.0, 480.0), Vec2::new(600.0, -13.0));
        World::new(bounds, Vec2::new(0.0, 2.0))
    }

    #[test]
    fn test_new_component_falls_with_gravity() {
        let c = PhysicsComponent::new(world(), PLAYER_SIZE);
        assert_eq!(c.position(), Vec2::ZERO);
        assert_eq!(c.velocity(), Vec2::ZERO);
        assert_eq!(c.acceleration(), Vec2::new(0.0, 2.0));
        assert!(!c.is_on_ground());
    }

    #[test]
    fn test_semi_implicit_euler() {
        let mut c = PhysicsComponent::new(world(), PLAYER_SIZE).with_position(Vec2::new(50.0, 0.0));
        c.update();
        // Velocity is updated before position
        assert_relative_eq!(c.velocity().y, 2.0);
        assert_relative_eq!(c.position().y, 2.0);
        c.update();
        assert_relative_eq!(c.velocity().y, 4.0);
        assert_relative_eq!(c.position().y, 6.0);
    }

    #[test]
    fn test_custom_acceleration_until_landing() {
        let mut c = PhysicsComponent::new(world(), PLAYER_SIZE)
            .with_position(Vec2::new(100.0, 300.0))
            .with_acceleration(Vec2::new(0.0, 9.0));
        c.update();
        assert_relative_eq!(c.velocity().y, 9.0);
        assert_eq!(c.acceleration(), Vec2::new(0.0, 9.0));

        c.update();
        assert!(c.is_on_ground());
        assert_eq!(c.acceleration(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_lands_on_floor() {
        let mut c = PhysicsComponent::new(world(), PLAYER_SIZE);
        for _ in 0..100 {
            c.update();
        }
        assert!(c.is_on_ground());
        assert_eq!(c.velocity().y, 0.0);
        assert_eq!(c.position().y, 467.0 - 148.0);
    }

    #[test]
    fn test_resting_component_stays_grounded() {
        let mut c =
            PhysicsComponent::new(world(), PLAYER_SIZE).with_position(Vec2::new(0.0, 319.0));
        c.update();
        assert!(c.is_on_ground());
        assert_eq!(c.velocity().y, 0.0);
        assert_eq!(c.position().y, 319.0);
    }

    #[test]
    fn test_ground_flag_resets_when_leaving_floor() {
        let mut c =
            PhysicsComponent::new(world(), PLAYER_SIZE).with_position(Vec2::new(0.0, 319.0));
        c.update();
        assert!(c.is_on_ground());

        c.add_velocity(Vec2::new(0.0, -32.0));
        c.update();
        assert!(!c.is_on_ground());
        assert_relative_eq!(c.velocity().y, -30.0);
        assert_relative_eq!(c.position().y, 289.0);
    }

    #[test]
    fn test_translate_x_keeps_velocity() {
        let mut c = PhysicsComponent::new(world(), PLAYER_SIZE).with_position(Vec2::new(100.0, 0.0));
        c.translate_x(-4.0);
        assert_eq!(c.position().x, 96.0);
        assert_eq!(c.velocity().x, 0.0);
    }

    #[test]
    fn test_walking_into_wall_is_clamped_on_next_update() {
        let mut c = PhysicsComponent::new(world(), PLAYER_SIZE).with_position(Vec2::new(2.0, 319.0));
        c.translate_x(-4.0);
        c.update();
        assert_eq!(c.position().x, 0.0);
    }
}
