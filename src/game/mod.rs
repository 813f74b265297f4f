// Game modules: configuration, the player and the session driving it

pub mod config;
pub mod player;
pub mod session;

pub use config::{ControlMode, GameConfig};
pub use session::Game;
