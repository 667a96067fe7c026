//! Game World
//!
//! The World is the simulation context passed into every update and draw:
//! - The entity pool (all entity storage)
//! - The sprite table (read-only after startup)
//! - The follow camera
//! - Which entity is the player
//!
//! It is created once at startup and dropped at shutdown; nothing in the
//! game reaches it through globals.

use macroquad::math::Vec2;
use rand::Rng;

use super::camera::CameraRig;
use super::entity::{Entity, EntityId};
use super::pool::EntityPool;
use super::sprite::{SpriteId, SpriteTable};
use super::tile::snap_to_tile;
use crate::config::GameConfig;
use crate::error::GameError;

pub struct World {
    pub pool: EntityPool,
    pub sprites: SpriteTable,
    pub camera: CameraRig,
    player: Option<EntityId>,
}

impl World {
    /// Empty world. `screen_center` becomes the camera offset.
    pub fn new(
        sprites: SpriteTable,
        camera_zoom: f32,
        screen_center: Vec2,
    ) -> Result<Self, GameError> {
        Ok(Self {
            pool: EntityPool::try_new()?,
            sprites,
            camera: CameraRig::new(camera_zoom, screen_center, Vec2::ZERO),
            player: None,
        })
    }

    // =========================================================================
    // Spawning
    // =========================================================================

    pub fn spawn_troll(&mut self, pos: Vec2) -> EntityId {
        self.pool.allocate(Entity::troll(pos))
    }

    pub fn spawn_goblin(&mut self, pos: Vec2) -> EntityId {
        self.pool.allocate(Entity::goblin(pos))
    }

    /// Spawn the player and point the camera straight at it.
    pub fn spawn_player(&mut self, pos: Vec2) -> EntityId {
        let id = self.pool.allocate(Entity::player(pos));
        self.player = Some(id);
        if let Some(center) = self.player_focus() {
            self.camera.target = center;
        }
        id
    }

    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.pool.destroy(id)
    }

    /// Scatter trolls and goblins on the tile grid, then spawn the player at the origin.
    ///
    /// Trolls and goblins are interleaved so slot order is troll, goblin,
    /// troll, goblin, ... with any surplus of one kind at the end.
    pub fn populate<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let extent = config.spawn_extent.max(0);
        for i in 0..config.troll_count.max(config.goblin_count) {
            if i < config.troll_count {
                let pos = random_tile_position(rng, extent);
                self.spawn_troll(pos);
            }
            if i < config.goblin_count {
                let pos = random_tile_position(rng, extent);
                self.spawn_goblin(pos);
            }
        }
        self.spawn_player(Vec2::ZERO);
        log::info!(
            "Spawned {} trolls, {} goblins and the player ({} entities)",
            config.troll_count,
            config.goblin_count,
            self.pool.len()
        );
    }

    // =========================================================================
    // Player
    // =========================================================================

    /// None until `spawn_player` runs
    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&Entity> {
        self.pool.get(self.player?)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.pool.get_mut(self.player?)
    }

    /// Point the camera follows: player position offset by half its sprite size.
    pub fn player_focus(&self) -> Option<Vec2> {
        let player = self.player()?;
        let sprite = self.sprites.get(SpriteId::Player);
        Some(player.pos + sprite.size / 2.0)
    }
}

/// Integer position in `0..=extent` on each axis, snapped to the tile grid
pub fn random_tile_position<R: Rng>(rng: &mut R, extent: i32) -> Vec2 {
    let x = rng.gen_range(0..=extent) as f32;
    let y = rng.gen_range(0..=extent) as f32;
    snap_to_tile(Vec2::new(x, y))
}
