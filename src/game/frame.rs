//! Per-frame data
//!
//! `FrameInput` is what the platform layer hands the simulation each frame;
//! `FrameState` is what the simulation hands back to the renderer. Neither
//! outlives the frame.

use macroquad::math::Vec2;
use super::entity::EntityId;

/// Input sampled for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Raw movement direction, each component in {-1, 0, 1}
    pub axis: Vec2,
    /// Seconds since the previous frame
    pub delta_t: f32,
    /// Pointer position in screen pixels
    pub pointer_screen: Vec2,
}

/// Scratch state rebuilt from scratch every frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameState {
    /// Pointer in world space, mapped through this frame's settled camera
    pub pointer: Vec2,
    /// Entity nearest the pointer within the selection radius
    pub selected: Option<EntityId>,
}

impl FrameState {
    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected == Some(id)
    }
}
