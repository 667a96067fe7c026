//! Per-frame simulation step
//!
//! Order within a frame:
//! 1. Move the player along the normalized input axis
//! 2. Ease the camera toward the player
//! 3. Map the pointer to world space through the eased camera
//! 4. Pick the entity nearest the pointer
//!
//! Mapping after the camera moves keeps hit-testing on the same transform
//! the frame is drawn with.
//!
//! The player is the only entity this step mutates.

use macroquad::math::Vec2;

use super::animate::animate_v2_to_target;
use super::entity::EntityId;
use super::frame::{FrameInput, FrameState};
use super::pool::EntityPool;
use super::world::World;

/// Player movement speed in world units per second
pub const PLAYER_SPEED: f32 = 100.0;
/// Smoothing rate for the follow camera
pub const CAMERA_FOLLOW_RATE: f32 = 3.0;
/// Pointer must be strictly closer than this to select an entity
pub const SELECTION_RADIUS: f32 = 16.0;

/// Advance the world by one frame and return that frame's scratch state.
pub fn update(world: &mut World, input: &FrameInput) -> FrameState {
    move_player(world, input.axis, input.delta_t);
    follow_player(world, input.delta_t);

    let pointer = world.camera.screen_to_world(input.pointer_screen);
    log::trace!("pointer ({:.2} - {:.2})", pointer.x, pointer.y);

    FrameState {
        pointer,
        selected: select_nearest(&world.pool, pointer, SELECTION_RADIUS),
    }
}

/// Move the player by `axis` (normalized) at `PLAYER_SPEED`. No collision, no clamping.
pub fn move_player(world: &mut World, axis: Vec2, delta_t: f32) {
    let step = axis.normalize_or_zero() * PLAYER_SPEED * delta_t;
    if let Some(player) = world.player_mut() {
        player.pos += step;
    }
}

/// Ease the camera target toward the player's sprite center.
pub fn follow_player(world: &mut World, delta_t: f32) {
    if let Some(focus) = world.player_focus() {
        animate_v2_to_target(&mut world.camera.target, focus, delta_t, CAMERA_FOLLOW_RATE);
    }
}

/// Nearest live entity to `pointer` with distance strictly below `radius`.
///
/// Scans in slot order and only replaces the current best on a strictly
/// smaller distance, so ties go to the lower slot.
pub fn select_nearest(pool: &EntityPool, pointer: Vec2, radius: f32) -> Option<EntityId> {
    let mut best: Option<(EntityId, f32)> = None;
    pool.for_each_valid(|id, entity| {
        let dist = entity.pos.distance(pointer);
        if dist >= radius {
            return;
        }
        let closer = match best {
            Some((_, best_dist)) => dist < best_dist,
            None => true,
        };
        if closer {
            best = Some((id, dist));
        }
    });
    best.map(|(id, _)| id)
}
