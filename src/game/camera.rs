//! Follow camera
//!
//! Pixel-space 2D view transform:
//!
//! `screen = offset + R(rotation) * zoom * (world - target)`
//!
//! with y growing downward on screen. `offset` is where `target` lands in
//! pixels, usually the screen center. Kept independent of macroquad's NDC
//! camera so pointer mapping works without a graphics context.

use macroquad::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// World point the camera looks at
    pub target: Vec2,
    /// Screen position (pixels) where `target` is drawn
    pub offset: Vec2,
    /// Degrees
    pub rotation: f32,
    pub zoom: f32,
}

impl CameraRig {
    pub fn new(zoom: f32, offset: Vec2, target: Vec2) -> Self {
        Self {
            target,
            offset,
            rotation: 0.0,
            zoom,
        }
    }

    fn rotate(v: Vec2, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.offset + Self::rotate((world - self.target) * self.zoom, self.rotation)
    }

    /// Inverse of `world_to_screen`. A zero zoom maps everything onto the target.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        if self.zoom == 0.0 {
            return self.target;
        }
        self.target + Self::rotate(screen - self.offset, -self.rotation) / self.zoom
    }

    /// Equivalent macroquad camera for a screen of the given pixel size.
    pub fn to_camera2d(&self, screen_w: f32, screen_h: f32) -> Camera2D {
        Camera2D {
            target: self.target,
            rotation: self.rotation,
            zoom: vec2(self.zoom * 2.0 / screen_w, self.zoom * 2.0 / screen_h),
            offset: vec2(
                self.offset.x * 2.0 / screen_w - 1.0,
                1.0 - self.offset.y * 2.0 / screen_h,
            ),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 0.001
    }

    #[test]
    fn test_target_maps_to_offset() {
        let cam = CameraRig::new(3.0, vec2(400.0, 225.0), vec2(5.0, 9.5));
        assert!(approx(cam.world_to_screen(vec2(5.0, 9.5)), vec2(400.0, 225.0)));
        assert!(approx(cam.screen_to_world(vec2(400.0, 225.0)), vec2(5.0, 9.5)));
    }

    #[test]
    fn test_zoom_scales_distance() {
        let cam = CameraRig::new(3.0, vec2(400.0, 225.0), Vec2::ZERO);
        assert!(approx(cam.world_to_screen(vec2(10.0, -4.0)), vec2(430.0, 213.0)));
        assert!(approx(cam.screen_to_world(vec2(430.0, 213.0)), vec2(10.0, -4.0)));
    }

    #[test]
    fn test_rotation_round_trip() {
        let mut cam = CameraRig::new(2.0, vec2(100.0, 50.0), vec2(3.0, -7.0));
        cam.rotation = 37.0;
        let world = vec2(-12.5, 40.0);
        assert!(approx(cam.screen_to_world(cam.world_to_screen(world)), world));
    }

    #[test]
    fn test_camera2d_maps_target_to_offset() {
        let cam = CameraRig::new(3.0, vec2(400.0, 225.0), vec2(16.0, 8.0));
        let c2d = cam.to_camera2d(800.0, 450.0);
        // Screen center is NDC origin
        assert!(approx(c2d.offset, Vec2::ZERO));
        assert!(approx(c2d.zoom, vec2(6.0 / 800.0, 6.0 / 450.0)));
        assert_eq!(c2d.target, vec2(16.0, 8.0));
    }
}
