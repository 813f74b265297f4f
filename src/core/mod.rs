// Geometry primitives

pub mod geometry;

pub use geometry::{Aabb, Vector};
