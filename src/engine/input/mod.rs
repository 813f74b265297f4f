// Input handling
//
// Translates native keyboard and gamepad events into a small symbolic
// alphabet for the game layer.
//
// - `key`: the `Key` alphabet and its mapping from winit key codes
// - `keyboard`: pressed / just pressed / just released tracking
// - `gamepad`: polled gilrs events and stick axes

pub mod gamepad;
pub mod key;
pub mod keyboard;

// Re-export commonly used types
pub use gamepad::Gamepad;
pub use key::Key;
pub use keyboard::KeyboardState;
