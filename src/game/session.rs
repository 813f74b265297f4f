// Game session: routes input to the player according to the control mode

use gilrs::Button;
use glam::Vec2;

use crate::engine::input::{Key, KeyboardState};

use super::config::{ControlMode, ControlsConfig};
use super::player::{Control, Player};

/// The running demo: one player and the control scheme driving it
#[derive(Debug)]
pub struct Game<F> {
    player: Player<F>,
    controls: ControlsConfig,
}

impl<F> Game<F> {
    pub fn new(player: Player<F>, controls: ControlsConfig) -> Self {
        Self { player, controls }
    }

    /// Handle a key press edge
    ///
    /// A key bound to both jump and attack only jumps.
    pub fn key_pressed(&mut self, key: Key) {
        if self.controls.mode != ControlMode::Keyboard {
            return;
        }

        if key == self.controls.jump_key {
            self.player.press(Control::Jump);
        } else if key == self.controls.attack_key {
            self.player.press(Control::Attack);
        }
    }

    /// Handle a gamepad button press edge
    pub fn gamepad_button_pressed(&mut self, button: Button) {
        if self.controls.mode != ControlMode::Joystick {
            return;
        }

        if button == self.controls.attack_button {
            self.player.press(Control::Attack);
        }
    }

    /// Translate held arrow keys into direction controls, once per tick
    pub fn poll_keyboard(&mut self, keyboard: &KeyboardState) {
        if self.controls.mode != ControlMode::Keyboard {
            return;
        }

        if keyboard.is_pressed(Key::Left) {
            self.player.press(Control::Left);
        } else if keyboard.is_pressed(Key::Right) {
            self.player.press(Control::Right);
        } else {
            self.release_directions();
        }
    }

    /// Translate the stick position into controls, once per tick
    ///
    /// `stick` is in screen orientation: negative y is up.
    pub fn poll_stick(&mut self, stick: Vec2) {
        if self.controls.mode != ControlMode::Joystick {
            return;
        }

        if stick.y < 0.0 {
            self.player.press(Control::Jump);
        }

        if stick.x > 0.0 {
            self.player.press(Control::Right);
        } else if stick.x < 0.0 {
            self.player.press(Control::Left);
        } else {
            self.release_directions();
        }
    }

    fn release_directions(&mut self) {
        self.player.release(Control::Left);
        self.player.release(Control::Right);
    }

    /// Run one simulation tick
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &Player<F> {
        &self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetError, FrameSource};
    use crate::game::config::DEFAULT_CONFIG;
    use crate::game::player::StateId;

    struct TwoFrames;

    impl FrameSource<()> for TwoFrames {
        fn load_frames(&mut self, _name: &str) -> Result<Vec<()>, AssetError> {
            Ok(vec![(), ()])
        }
    }

    fn new_game(mode: ControlMode) -> Game<()> {
        let mut controls = DEFAULT_CONFIG.controls.clone();
        controls.mode = mode;
        game_with_controls(controls)
    }

    fn game_with_controls(controls: ControlsConfig) -> Game<()> {
        let mut config = DEFAULT_CONFIG.clone();
        config.controls = controls;
        config.player.spawn = Vec2::new(200.0, 319.0);

        let player = Player::with_initial_state(
            &config.player,
            config.physics.world(),
            &mut TwoFrames,
            StateId::IdleRight,
        )
        .unwrap();
        let mut game = Game::new(player, config.controls);
        game.update();
        game
    }

    #[test]
    fn test_keyboard_walk_and_stop() {
        let mut game = new_game(ControlMode::Keyboard);
        let mut keyboard = KeyboardState::new();

        keyboard.press(Key::Left);
        game.poll_keyboard(&keyboard);
        game.update();
        assert_eq!(game.player().state(), StateId::WalkLeft);

        keyboard.release(Key::Left);
        game.poll_keyboard(&keyboard);
        game.update();
        assert_eq!(game.player().state(), StateId::IdleLeft);
    }

    #[test]
    fn test_keyboard_left_wins_over_right() {
        let mut game = new_game(ControlMode::Keyboard);
        let mut keyboard = KeyboardState::new();

        keyboard.press(Key::Right);
        keyboard.press(Key::Left);
        game.poll_keyboard(&keyboard);
        game.update();
        assert_eq!(game.player().state(), StateId::WalkLeft);
    }

    #[test]
    fn test_keyboard_jump_and_attack_keys() {
        let mut game = new_game(ControlMode::Keyboard);
        game.key_pressed(Key::Up);
        game.update();
        assert_eq!(game.player().state(), StateId::IdleJumpRight);

        let mut game = new_game(ControlMode::Keyboard);
        game.key_pressed(Key::A);
        game.update();
        assert_eq!(game.player().state(), StateId::AttackRight);

        let mut game = new_game(ControlMode::Keyboard);
        game.key_pressed(Key::Q);
        game.update();
        assert_eq!(game.player().state(), StateId::IdleRight);
    }

    #[test]
    fn test_shared_jump_and_attack_key_only_jumps() {
        let mut controls = DEFAULT_CONFIG.controls.clone();
        controls.mode = ControlMode::Keyboard;
        controls.attack_key = Key::Up;
        let mut game = game_with_controls(controls);

        game.key_pressed(Key::Up);
        game.update();
        assert_eq!(game.player().state(), StateId::IdleJumpRight);
        assert_eq!(game.player().physics().velocity().y, -32.0);
    }

    #[test]
    fn test_keyboard_mode_ignores_gamepad() {
        let mut game = new_game(ControlMode::Keyboard);
        game.gamepad_button_pressed(Button::West);
        game.poll_stick(Vec2::new(1.0, -1.0));
        game.update();
        assert_eq!(game.player().state(), StateId::IdleRight);
    }

    #[test]
    fn test_joystick_stick_directions() {
        let mut game = new_game(ControlMode::Joystick);

        game.poll_stick(Vec2::new(-0.7, 0.0));
        game.update();
        assert_eq!(game.player().state(), StateId::WalkLeft);

        game.poll_stick(Vec2::ZERO);
        game.update();
        assert_eq!(game.player().state(), StateId::IdleLeft);
    }

    #[test]
    fn test_joystick_stick_up_jumps() {
        let mut game = new_game(ControlMode::Joystick);
        game.poll_stick(Vec2::new(0.0, -0.9));
        game.update();
        assert_eq!(game.player().state(), StateId::IdleJumpRight);
    }

    #[test]
    fn test_joystick_attack_button() {
        let mut game = new_game(ControlMode::Joystick);
        game.gamepad_button_pressed(Button::South);
        assert_eq!(game.player().pending_state(), StateId::IdleRight);

        game.gamepad_button_pressed(Button::West);
        game.update();
        assert_eq!(game.player().state(), StateId::AttackRight);
    }

    #[test]
    fn test_joystick_mode_ignores_keyboard() {
        let mut game = new_game(ControlMode::Joystick);
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Left);

        game.key_pressed(Key::Up);
        game.poll_keyboard(&keyboard);
        assert_eq!(game.player().pending_state(), StateId::IdleRight);
    }
}
