//! Frame-rate independent smoothing
//!
//! Each call closes `1 - 2^(-rate * dt)` of the remaining distance, so the
//! same fraction is covered per second no matter how the frame time is
//! sliced. Values within `SNAP_EPSILON` of the target snap onto it, which
//! keeps the approach from drifting asymptotically forever.

use macroquad::math::Vec2;

/// Distance at which an animated value is considered arrived
pub const SNAP_EPSILON: f32 = 0.001;

fn almost_equals(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Move `value` toward `target`. Returns true once it has snapped onto the target.
pub fn animate_f32_to_target(value: &mut f32, target: f32, delta_t: f32, rate: f32) -> bool {
    *value += (target - *value) * (1.0 - (-rate * delta_t).exp2());
    if almost_equals(*value, target, SNAP_EPSILON) {
        *value = target;
        return true;
    }
    false
}

/// Per-axis version of [`animate_f32_to_target`]; each axis settles on its own.
pub fn animate_v2_to_target(value: &mut Vec2, target: Vec2, delta_t: f32, rate: f32) {
    animate_f32_to_target(&mut value.x, target.x, delta_t, rate);
    animate_f32_to_target(&mut value.y, target.y, delta_t, rate);
}
