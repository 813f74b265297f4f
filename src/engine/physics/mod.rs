// Box physics: semi-implicit Euler integration clipped against world bounds

pub mod body;
mod world;

pub use body::PhysicsComponent;
pub use world::World;
