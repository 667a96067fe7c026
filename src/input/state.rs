//! Input state management
//!
//! Polls the keyboard and mouse through macroquad and folds them into a
//! `FrameInput` for the simulation.

use macroquad::input::{is_key_down, is_key_pressed, is_quit_requested, mouse_position, KeyCode};
use macroquad::math::{vec2, Vec2};
use macroquad::time::get_frame_time;
use crate::game::FrameInput;

/// Movement axis from the four direction keys (screen y points down).
///
/// Opposite keys cancel. The result is not normalized; the update step does that.
pub fn axis_from_keys(up: bool, left: bool, down: bool, right: bool) -> Vec2 {
    let mut axis = Vec2::ZERO;
    if up { axis.y -= 1.0; }
    if left { axis.x -= 1.0; }
    if down { axis.y += 1.0; }
    if right { axis.x += 1.0; }
    axis
}

/// Keyboard/mouse front end
pub struct InputState {
    pub up: KeyCode,
    pub left: KeyCode,
    pub down: KeyCode,
    pub right: KeyCode,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            up: KeyCode::W,
            left: KeyCode::A,
            down: KeyCode::S,
            right: KeyCode::D,
        }
    }

    /// WASD as a raw axis
    pub fn movement_axis(&self) -> Vec2 {
        axis_from_keys(
            is_key_down(self.up),
            is_key_down(self.left),
            is_key_down(self.down),
            is_key_down(self.right),
        )
    }

    /// Sample everything the simulation needs for this frame.
    /// The pointer stays in screen pixels; `update` maps it once the camera has moved.
    pub fn poll(&self) -> FrameInput {
        let (mx, my) = mouse_position();

        FrameInput {
            axis: self.movement_axis(),
            delta_t: get_frame_time(),
            pointer_screen: vec2(mx, my),
        }
    }

    /// Window close button or Escape
    pub fn close_requested(&self) -> bool {
        is_quit_requested() || is_key_pressed(KeyCode::Escape)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_from_keys() {
        assert_eq!(axis_from_keys(false, false, false, false), Vec2::ZERO);
        assert_eq!(axis_from_keys(true, false, false, false), vec2(0.0, -1.0));
        assert_eq!(axis_from_keys(false, false, false, true), vec2(1.0, 0.0));
        assert_eq!(axis_from_keys(true, true, false, false), vec2(-1.0, -1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        assert_eq!(axis_from_keys(true, true, true, true), Vec2::ZERO);
        assert_eq!(axis_from_keys(false, true, false, true), Vec2::ZERO);
    }
}
