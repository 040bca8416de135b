//! Per-frame keyboard input resource.
//!
//! Captures the directional keys the demo cares about. Either WASD or the
//! arrow keys move the player.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Directional state read once per frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Refresh from the keyboard.
    pub fn poll(&mut self, rl: &RaylibHandle) {
        let down = |a: KeyboardKey, b: KeyboardKey| rl.is_key_down(a) || rl.is_key_down(b);
        self.up = down(KeyboardKey::KEY_W, KeyboardKey::KEY_UP);
        self.down = down(KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN);
        self.left = down(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT);
        self.right = down(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT);
    }

    /// Unit-length movement direction, zero when idle or when opposite keys cancel.
    pub fn direction(&self) -> Vector2 {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.down as i8 - self.up as i8) as f32;
        if x != 0.0 && y != 0.0 {
            Vector2 {
                x: x * std::f32::consts::FRAC_1_SQRT_2,
                y: y * std::f32::consts::FRAC_1_SQRT_2,
            }
        } else {
            Vector2 { x, y }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let input = InputState::default();
        assert_eq!(input.direction(), Vector2 { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = InputState {
            left: true,
            right: true,
            up: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vector2 { x: 0.0, y: -1.0 });
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let input = InputState {
            right: true,
            down: true,
            ..Default::default()
        };
        let d = input.direction();
        assert!((d.x * d.x + d.y * d.y - 1.0).abs() < 1e-6);
        assert!(d.x > 0.0 && d.y > 0.0);
    }
}
