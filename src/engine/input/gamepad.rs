// Gamepad input through gilrs

use gilrs::{Axis, Button, EventType, Gilrs};
use glam::Vec2;
use log::{info, warn};

/// One gamepad, picked by index among the connected ones
///
/// When gilrs cannot start (no backend on this platform), the gamepad stays
/// silent instead of failing the game.
pub struct Gamepad {
    gilrs: Option<Gilrs>,
    index: usize,
    dead_zone: f32,
}

impl Gamepad {
    pub fn new(index: usize, dead_zone: f32) -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => {
                for (id, gamepad) in gilrs.gamepads() {
                    info!("Gamepad {} connected: {}", id, gamepad.name());
                }
                Some(gilrs)
            }
            Err(e) => {
                warn!("Gamepad support unavailable: {}", e);
                None
            }
        };

        Self {
            gilrs,
            index,
            dead_zone,
        }
    }

    /// Drain pending events, returning buttons pressed on the selected gamepad
    pub fn poll(&mut self) -> Vec<Button> {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return Vec::new();
        };

        let selected = gilrs.gamepads().nth(self.index).map(|(id, _)| id);
        let mut pressed = Vec::new();

        while let Some(event) = gilrs.next_event() {
            match event.event {
                EventType::ButtonPressed(button, _) if Some(event.id) == selected => {
                    pressed.push(button);
                }
                EventType::Connected => info!("Gamepad {} connected", event.id),
                EventType::Disconnected => info!("Gamepad {} disconnected", event.id),
                _ => {}
            }
        }

        pressed
    }

    /// Left stick position, y pointing down like screen space
    pub fn left_stick(&self) -> Vec2 {
        let Some(gamepad) = self
            .gilrs
            .as_ref()
            .and_then(|gilrs| gilrs.gamepads().nth(self.index).map(|(_, gp)| gp))
        else {
            return Vec2::ZERO;
        };

        let x = gamepad.value(Axis::LeftStickX);
        let y = -gamepad.value(Axis::LeftStickY);
        apply_dead_zone(Vec2::new(x, y), self.dead_zone)
    }
}

/// Zero out each axis whose magnitude is below the dead zone
pub fn apply_dead_zone(stick: Vec2, dead_zone: f32) -> Vec2 {
    let filter = |v: f32| if v.abs() < dead_zone { 0.0 } else { v };
    Vec2::new(filter(stick.x), filter(stick.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_zone_filters_each_axis() {
        let stick = apply_dead_zone(Vec2::new(0.1, -0.8), 0.15);
        assert_eq!(stick, Vec2::new(0.0, -0.8));

        let stick = apply_dead_zone(Vec2::new(-0.5, 0.05), 0.15);
        assert_eq!(stick, Vec2::new(-0.5, 0.0));
    }

    #[test]
    fn test_zero_dead_zone_keeps_values() {
        let stick = Vec2::new(0.01, -0.02);
        assert_eq!(apply_dead_zone(stick, 0.0), stick);
    }
}
