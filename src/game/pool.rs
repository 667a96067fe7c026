//! Fixed-capacity entity pool
//!
//! Exactly `MAX_ENTITY_COUNT` slots, reserved once at startup and never
//! grown. Allocation is first-fit from slot 0, so a freshly freed low slot
//! is the next one handed out. Slots are never compacted: an entity keeps
//! its index for as long as it lives, and index order doubles as draw order
//! and selection tie-break order.

use super::entity::{Entity, EntityId};
use crate::error::GameError;

/// Hard ceiling on live entities
pub const MAX_ENTITY_COUNT: usize = 1024;

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    /// Bumped every time the slot is freed
    generation: u32,
    /// None when the slot is free
    entity: Option<Entity>,
}

pub struct EntityPool {
    slots: Box<[Slot]>,
    alive_count: usize,
}

impl EntityPool {
    /// Reserve storage for every slot up front.
    pub fn try_new() -> Result<Self, GameError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(MAX_ENTITY_COUNT)?;
        slots.resize(MAX_ENTITY_COUNT, Slot::default());
        Ok(Self {
            slots: slots.into_boxed_slice(),
            alive_count: 0,
        })
    }

    /// Place `entity` in the first free slot, or None if every slot is taken.
    pub fn try_allocate(&mut self, entity: Entity) -> Option<EntityId> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.entity.is_none())?;
        slot.entity = Some(entity);
        self.alive_count += 1;
        Some(EntityId::new(index as u32, slot.generation))
    }

    /// Place `entity` in the first free slot.
    ///
    /// # Panics
    /// When all `MAX_ENTITY_COUNT` slots are in use. Running out is a logic
    /// error in the caller, not something to recover from.
    pub fn allocate(&mut self, entity: Entity) -> EntityId {
        match self.try_allocate(entity) {
            Some(id) => id,
            None => panic!("entity pool exhausted: all {} slots in use", MAX_ENTITY_COUNT),
        }
    }

    /// Free the entity's slot. Returns false if the id was already stale.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let slot = &mut self.slots[id.index() as usize];
        *slot = Slot {
            generation: slot.generation.wrapping_add(1),
            entity: None,
        };
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.entity.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.entity.as_mut())
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.alive_count
    }

    pub fn is_empty(&self) -> bool {
        self.alive_count == 0
    }

    /// Live entities in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entity
                .as_ref()
                .map(|entity| (EntityId::new(index as u32, slot.generation), entity))
        })
    }

    /// Visit every live entity in slot order.
    pub fn for_each_valid(&self, mut visitor: impl FnMut(EntityId, &Entity)) {
        for (id, entity) in self.iter() {
            visitor(id, entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;
    use std::collections::HashSet;

    fn troll() -> Entity {
        Entity::troll(Vec2::ZERO)
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut pool = EntityPool::try_new().unwrap();
        let ids: HashSet<u32> = (0..MAX_ENTITY_COUNT)
            .map(|_| pool.allocate(troll()).index())
            .collect();
        assert_eq!(ids.len(), MAX_ENTITY_COUNT);
        assert_eq!(pool.len(), MAX_ENTITY_COUNT);
        assert!(pool.try_allocate(troll()).is_none());
    }

    #[test]
    #[should_panic(expected = "entity pool exhausted")]
    fn test_allocate_past_capacity_panics() {
        let mut pool = EntityPool::try_new().unwrap();
        for _ in 0..MAX_ENTITY_COUNT {
            pool.allocate(troll());
        }
        pool.allocate(troll());
    }

    #[test]
    fn test_first_fit_reuses_freed_slot() {
        let mut pool = EntityPool::try_new().unwrap();
        let a = pool.allocate(troll());
        let b = pool.allocate(troll());
        let c = pool.allocate(troll());
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));

        assert!(pool.destroy(b));
        let d = pool.allocate(Entity::goblin(Vec2::ONE));
        assert_eq!(d.index(), 1);
        assert_ne!(d.generation(), b.generation());

        // Stale id does not see the new occupant
        assert!(!pool.is_alive(b));
        assert!(pool.get(b).is_none());
        assert_eq!(pool.get(d).map(|e| e.pos), Some(Vec2::ONE));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut pool = EntityPool::try_new().unwrap();
        let a = pool.allocate(troll());
        assert!(pool.destroy(a));
        assert!(!pool.destroy(a));
        assert!(!pool.destroy(EntityId::new(MAX_ENTITY_COUNT as u32, 0)));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_destroy_does_not_move_others() {
        let mut pool = EntityPool::try_new().unwrap();
        let ids: Vec<EntityId> = (0..5)
            .map(|i| pool.allocate(Entity::goblin(Vec2::new(i as f32, 0.0))))
            .collect();
        pool.destroy(ids[2]);
        for (i, id) in ids.iter().enumerate().filter(|(i, _)| *i != 2) {
            assert_eq!(pool.get(*id).map(|e| e.pos.x), Some(i as f32));
        }
    }

    #[test]
    fn test_iteration_in_slot_order_skips_free() {
        let mut pool = EntityPool::try_new().unwrap();
        let ids: Vec<EntityId> = (0..4).map(|_| pool.allocate(troll())).collect();
        pool.destroy(ids[1]);

        let mut visited = Vec::new();
        pool.for_each_valid(|id, _| visited.push(id.index()));
        assert_eq!(visited, vec![0, 2, 3]);
        assert_eq!(pool.iter().count(), 3);
    }

    #[test]
    fn test_get_mut_updates_entity() {
        let mut pool = EntityPool::try_new().unwrap();
        let id = pool.allocate(Entity::player(Vec2::ZERO));
        if let Some(player) = pool.get_mut(id) {
            player.pos.x += 10.0;
        }
        assert_eq!(pool.get(id).map(|e| e.pos), Some(Vec2::new(10.0, 0.0)));
    }
}
