//! World Renderer
//!
//! Draws one frame of the world through the follow camera:
//! checkerboard tiles around the player, then every live entity in slot
//! order (the selected one tinted red), then the optional hover-bounds
//! overlay.

use macroquad::prelude::*;

use super::entity::{Archetype, Entity};
use super::frame::FrameState;
use super::sprite::Sprite;
use super::tile::{is_light_tile, tile_to_world, visible_tiles, world_to_tile, TILE_WIDTH};
use super::world::World;
use crate::geometry::Range2;

/// Padding added around sprite bounds for the hover overlay
const HOVER_PADDING: f32 = 10.0;

const HOVER_COLOR: Color = Color::new(0.9, 0.16, 0.22, 0.35);

/// Tint for an entity sprite
pub fn entity_tint(selected: bool) -> Color {
    if selected {
        RED
    } else {
        WHITE
    }
}

/// Top-left corner a sprite is drawn from so it centers on `pos`
pub fn sprite_origin(pos: Vec2, size: Vec2) -> Vec2 {
    pos - size / 2.0
}

/// Hover box: sprite bounds anchored at the entity's feet, padded
pub fn hover_bounds(entity: &Entity, sprite: &Sprite) -> Range2 {
    Range2::make_bottom_anchored(sprite.size)
        .shift(entity.pos)
        .grow(Vec2::splat(HOVER_PADDING))
}

/// Draw the whole world for this frame.
pub fn draw_world(world: &World, frame: &FrameState, debug_bounds: bool) {
    clear_background(LIGHTGRAY);

    set_camera(&world.camera.to_camera2d(screen_width(), screen_height()));

    if let Some(player) = world.player() {
        draw_tiles(player.pos);
    }

    world.pool.for_each_valid(|id, entity| {
        let sprite = world.sprites.get(entity.sprite);
        let tint = entity_tint(frame.is_selected(id));
        match entity.archetype {
            Archetype::Troll | Archetype::Goblin | Archetype::Player | Archetype::CardFireball => {
                draw_sprite(entity, sprite, tint);
            }
        }
    });

    if debug_bounds {
        draw_hover_bounds(world, frame.pointer);
    }

    set_default_camera();
}

/// White checkerboard tiles centered on the tile grid around `center`
fn draw_tiles(center: Vec2) {
    let (xs, ys) = visible_tiles((world_to_tile(center.x), world_to_tile(center.y)));
    let w = TILE_WIDTH as f32;
    for x in xs {
        for y in ys.clone() {
            if is_light_tile(x, y) {
                draw_rectangle(
                    tile_to_world(x) - w * 0.5,
                    tile_to_world(y) - w * 0.5,
                    w,
                    w,
                    WHITE,
                );
            }
        }
    }
}

fn draw_sprite(entity: &Entity, sprite: &Sprite, tint: Color) {
    let origin = sprite_origin(entity.pos, sprite.size);
    match &sprite.image {
        Some(texture) => draw_texture(texture, origin.x, origin.y, tint),
        None => {
            // No art loaded: stand-in block at the logical size
            let color = if tint == WHITE { DARKGRAY } else { tint };
            draw_rectangle(origin.x, origin.y, sprite.size.x, sprite.size.y, color);
        }
    }
}

fn draw_hover_bounds(world: &World, pointer: Vec2) {
    world.pool.for_each_valid(|_, entity| {
        let bounds = hover_bounds(entity, world.sprites.get(entity.sprite));
        if bounds.contains(pointer) {
            let size = bounds.size();
            draw_rectangle(bounds.min.x, bounds.min.y, size.x, size.y, HOVER_COLOR);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_centered_on_position() {
        let origin = sprite_origin(vec2(16.0, 8.0), vec2(10.0, 19.0));
        assert_eq!(origin, vec2(11.0, -1.5));
    }

    #[test]
    fn test_selected_entity_tinted_red() {
        assert_eq!(entity_tint(true), RED);
        assert_eq!(entity_tint(false), WHITE);
    }

    #[test]
    fn test_hover_bounds_padded_around_feet() {
        let troll = Entity::troll(vec2(100.0, 50.0));
        let bounds = hover_bounds(&troll, &Sprite::sized(vec2(8.0, 14.0)));
        assert_eq!(bounds.min, vec2(86.0, 40.0));
        assert_eq!(bounds.max, vec2(114.0, 74.0));
        assert!(bounds.contains(vec2(100.0, 50.0)));
        assert!(!bounds.contains(vec2(100.0, 30.0)));
    }
}
