// world.rs - Entity arena shared by all systems
//
// Systems never own entities; they hold `EntityId` handles into this arena and
// receive the world by reference for the duration of a hook.

use crate::ecs::{ComponentSet, EcsError, Entity, EntityId, Family};
use std::ops::{Index, IndexMut};

/// Ordered, append-only storage for every entity in the game.
#[derive(Debug, Default)]
pub struct World {
    entities: Vec<Entity>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity and return its handle. Entities are never removed,
    /// so handles stay valid for the lifetime of the world.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = EntityId::new(self.entities.len() as u32);
        tracing::debug!(entity = %id, ?entity, "spawned entity");
        self.entities.push(entity);
        id
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index() as usize)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index() as usize)
    }

    pub fn try_entity(&self, id: EntityId) -> Result<&Entity, EcsError> {
        self.entity(id).ok_or(EcsError::UnknownEntity(id))
    }

    pub fn try_entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, EcsError> {
        self.entity_mut(id).ok_or(EcsError::UnknownEntity(id))
    }

    /// Handles of all entities having every kind in `S`, in arena order.
    ///
    /// A linear scan: always reflects mutations made earlier in the pass.
    pub fn entities_with<S: ComponentSet>(&self) -> Vec<EntityId> {
        let required = S::bits();
        self.iter()
            .filter(|(_, entity)| entity.bits().contains_all(&required))
            .map(|(id, _)| id)
            .collect()
    }

    /// First entity having every kind in `S`. Used for singleton lookups.
    pub fn first_with<S: ComponentSet>(&self) -> Option<EntityId> {
        let required = S::bits();
        self.iter()
            .find(|(_, entity)| entity.bits().contains_all(&required))
            .map(|(id, _)| id)
    }

    /// Handles of all entities matched by `family`, in arena order.
    pub fn matching(&self, family: &Family) -> Vec<EntityId> {
        self.iter()
            .filter(|(_, entity)| family.matches(entity))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (EntityId::new(index as u32), entity))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Index<EntityId> for World {
    type Output = Entity;

    fn index(&self, id: EntityId) -> &Self::Output {
        self.try_entity(id).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl IndexMut<EntityId> for World {
    fn index_mut(&mut self, id: EntityId) -> &mut Self::Output {
        self.try_entity_mut(id).unwrap_or_else(|err| panic!("{err}"))
    }
}
