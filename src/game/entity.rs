//! Entities and their handles
//!
//! An `EntityId` names a pool slot plus the generation of that slot. When an
//! entity is destroyed its slot's generation increments, so an id kept around
//! after the destroy no longer resolves, even once the slot has been reused
//! by a new goblin.

use macroquad::math::Vec2;
use super::sprite::SpriteId;

/// Slot number plus the reuse count of that slot at allocation time.
///
/// Only `EntityPool` mints these. There is no "null" id: a missing entity
/// is spelled `Option<EntityId>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    slot: u32,
    generation: u32,
}

impl EntityId {
    pub(crate) fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// Slot in the pool; slot order is draw order and tie-break order
    pub fn index(&self) -> u32 {
        self.slot
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// What kind of actor an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Troll,
    Goblin,
    Player,
    CardFireball,
}

impl Archetype {
    /// Sprite drawn for this archetype
    pub fn sprite(self) -> SpriteId {
        match self {
            Archetype::Troll => SpriteId::Troll,
            Archetype::Goblin => SpriteId::Goblin,
            Archetype::Player => SpriteId::Player,
            Archetype::CardFireball => SpriteId::CardFireball,
        }
    }
}

/// One simulated actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// World-space position
    pub pos: Vec2,
    pub archetype: Archetype,
    pub sprite: SpriteId,
}

impl Entity {
    /// Entity of the given archetype with its default sprite.
    pub fn new(archetype: Archetype, pos: Vec2) -> Self {
        Self {
            pos,
            archetype,
            sprite: archetype.sprite(),
        }
    }

    pub fn troll(pos: Vec2) -> Self {
        Self::new(Archetype::Troll, pos)
    }

    pub fn goblin(pos: Vec2) -> Self {
        Self::new(Archetype::Goblin, pos)
    }

    pub fn player(pos: Vec2) -> Self {
        Self::new(Archetype::Player, pos)
    }
}
