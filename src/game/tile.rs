//! Tile grid mapping
//!
//! The world is divided into square tiles `TILE_WIDTH` units wide. Tile `t`
//! is centered on world coordinate `t * TILE_WIDTH`.

use macroquad::math::Vec2;
use std::ops::Range;

/// Edge length of one tile in world units
pub const TILE_WIDTH: i32 = 8;

/// Tiles drawn on each side of the player's tile
pub const TILE_RADIUS_X: i32 = 40;
pub const TILE_RADIUS_Y: i32 = 30;

/// World coordinate to the nearest tile index (halfway cases round away from zero)
pub fn world_to_tile(world_pos: f32) -> i32 {
    (world_pos / TILE_WIDTH as f32).round() as i32
}

/// Tile index to the world coordinate of its center
pub fn tile_to_world(tile_pos: i32) -> f32 {
    tile_pos as f32 * TILE_WIDTH as f32
}

/// Quantize a position onto tile centers
pub fn snap_to_tile(world_pos: Vec2) -> Vec2 {
    Vec2::new(
        tile_to_world(world_to_tile(world_pos.x)),
        tile_to_world(world_to_tile(world_pos.y)),
    )
}

/// Checkerboard parity for background tiles
pub fn is_light_tile(x: i32, y: i32) -> bool {
    let row_shift = if y.rem_euclid(2) == 0 { 1 } else { 0 };
    (x + row_shift).rem_euclid(2) == 0
}

/// Half-open tile ranges covered by the background around `center`
pub fn visible_tiles(center: (i32, i32)) -> (Range<i32>, Range<i32>) {
    let (cx, cy) = center;
    (
        (cx - TILE_RADIUS_X)..(cx + TILE_RADIUS_X),
        (cy - TILE_RADIUS_Y)..(cy + TILE_RADIUS_Y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_round_trip() {
        for t in -100_000..=100_000 {
            assert_eq!(world_to_tile(tile_to_world(t)), t);
        }
        for &t in &[i32::MIN / TILE_WIDTH + 1, i32::MAX / TILE_WIDTH - 1] {
            // Far tiles are not exact in f32; the world position must still be stable.
            let w = tile_to_world(t);
            assert_eq!(tile_to_world(world_to_tile(w)), w);
        }
    }

    #[test]
    fn test_world_to_tile_rounds_to_nearest() {
        assert_eq!(world_to_tile(0.0), 0);
        assert_eq!(world_to_tile(3.9), 0);
        assert_eq!(world_to_tile(4.1), 1);
        assert_eq!(world_to_tile(-3.9), 0);
        assert_eq!(world_to_tile(-4.1), -1);
        // Ties go away from zero
        assert_eq!(world_to_tile(4.0), 1);
        assert_eq!(world_to_tile(-4.0), -1);
    }

    #[test]
    fn test_snap_to_tile() {
        assert_eq!(snap_to_tile(Vec2::new(13.0, 197.0)), Vec2::new(16.0, 200.0));
        assert_eq!(snap_to_tile(Vec2::new(-5.0, 2.0)), Vec2::new(-8.0, 0.0));
        let snapped = snap_to_tile(Vec2::new(123.0, 45.0));
        assert_eq!(snap_to_tile(snapped), snapped);
    }

    #[test]
    fn test_checkerboard_alternates() {
        for y in -4..4 {
            for x in -4..4 {
                assert_ne!(is_light_tile(x, y), is_light_tile(x + 1, y));
                assert_ne!(is_light_tile(x, y), is_light_tile(x, y + 1));
            }
        }
        assert!(is_light_tile(1, 0));
        assert!(!is_light_tile(0, 0));
    }

    #[test]
    fn test_visible_tiles() {
        let (xs, ys) = visible_tiles((2, -1));
        assert_eq!(xs, -38..42);
        assert_eq!(ys, -31..29);
    }
}
