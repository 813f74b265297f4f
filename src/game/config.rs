// Game configuration - window, player tuning, world and controls

use crate::core::Aabb;
use crate::engine::input::Key;
use crate::engine::physics::World;
use glam::Vec2;

/// How the player is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Keyboard,
    Joystick,
}

/// Window settings
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Logical size of the play area in pixels
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
    /// Fixed simulation rate
    pub ticks_per_second: u32,
}

/// Player tuning
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Horizontal displacement per tick while walking
    pub walk_speed: f32,
    /// Upward impulse of a jump
    pub jump_force: f32,
    /// Size of the physics box
    pub size: Vec2,
    /// Where the player appears
    pub spawn: Vec2,
    /// Velocity at spawn
    pub spawn_velocity: Vec2,
    /// Acceleration added to gravity until the player first lands
    pub spawn_acceleration: Vec2,
}

/// World bounds and gravity
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    pub offset: Vec2,
    pub gravity: Vec2,
    /// Width and (negative) height of the play area, measured from `offset`
    pub size: Vec2,
}

impl PhysicsConfig {
    /// Build the world described by this configuration
    pub fn world(&self) -> World {
        World::new(Aabb::new(self.offset, self.size), self.gravity)
    }
}

/// Asset locations
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Root image directory; animations live in `<images_dir>/animations/<name>/`
    pub images_dir: &'static str,
    /// Background image, relative to `images_dir`
    pub background: &'static str,
}

/// Input bindings
#[derive(Debug, Clone)]
pub struct ControlsConfig {
    pub mode: ControlMode,
    pub jump_key: Key,
    pub attack_key: Key,
    /// Index of the gamepad used in joystick mode
    pub gamepad: usize,
    pub attack_button: gilrs::Button,
    /// Stick values below this magnitude count as centred
    pub dead_zone: f32,
}

/// Complete game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub physics: PhysicsConfig,
    pub assets: AssetConfig,
    pub controls: ControlsConfig,
}

const WINDOW_WIDTH: u32 = 600;
const WINDOW_HEIGHT: u32 = 480;

/// The demo's configuration
pub const DEFAULT_CONFIG: GameConfig = GameConfig {
    window: WindowConfig {
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
        title: "Demo Fil Rouge",
        ticks_per_second: 40,
    },

    player: PlayerConfig {
        walk_speed: 4.0,
        jump_force: 32.0,
        size: Vec2::new(186.0, 148.0),
        spawn: Vec2::ZERO,
        spawn_velocity: Vec2::ZERO,
        spawn_acceleration: Vec2::ZERO,
    },

    // Floor sits 13 pixels above the bottom of the window
    physics: PhysicsConfig {
        offset: Vec2::new(0.0, WINDOW_HEIGHT as f32),
        gravity: Vec2::new(0.0, 2.0),
        size: Vec2::new(WINDOW_WIDTH as f32, -13.0),
    },

    assets: AssetConfig {
        images_dir: "images",
        background: "fond.png",
    },

    controls: ControlsConfig {
        mode: ControlMode::Keyboard,
        jump_key: Key::Up,
        attack_key: Key::A,
        gamepad: 0,
        attack_button: gilrs::Button::West,
        dead_zone: 0.15,
    },
};

impl Default for GameConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 600);
        assert_eq!(config.window.ticks_per_second, 40);
        assert_eq!(config.player.walk_speed, 4.0);
        assert_eq!(config.player.jump_force, 32.0);
        assert_eq!(config.controls.mode, ControlMode::Keyboard);
    }

    #[test]
    fn test_world_from_config() {
        let world = DEFAULT_CONFIG.physics.world();
        assert_eq!(world.floor(), 467.0);
        assert_eq!(world.gravity(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_player_fits_between_walls() {
        let config = GameConfig::default();
        let world = config.physics.world();
        assert!(config.player.size.x < config.physics.size.x);
        assert!(config.player.size.y < world.floor());
    }
}
