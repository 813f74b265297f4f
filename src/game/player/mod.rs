// Player system
//
// This module contains everything related to the playable character:
// - Frame-sequence animations and the library that owns them
// - The ten player states, control signals and the transition table
// - The player model tying the state machine to physics and animation

pub mod animation;
pub mod model;
pub mod state;

// Re-export commonly used types
pub use animation::AnimationError;
pub use model::Player;
pub use state::{Control, StateId};

/// Player construction and configuration errors
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Unknown player state: {0}")]
    UnknownState(String),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}
