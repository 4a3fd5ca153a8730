//! Entities: a bag of components plus a presence mask
//!
//! Every entity keeps a [`BitSet`] whose bit *i* is set iff a component with
//! id *i* is attached. All presence queries go through the mask so that family
//! matching and direct `has` checks can never disagree.

use crate::bitset::BitSet;
use crate::ecs::{component_id, Component, ComponentId, ComponentSet, EcsError};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Handle to an entity in the [`World`](crate::ecs::World) arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of the entity in the arena.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A set of components, at most one per kind.
#[derive(Default)]
pub struct Entity {
    components: HashMap<ComponentId, Box<dyn Any + Send + Sync>>,
    bits: BitSet,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`attach`](Self::attach).
    pub fn with<T: Component>(mut self, component: T) -> Self {
        self.attach(component);
        self
    }

    /// Store `component`, replacing any component of the same kind.
    ///
    /// Returns the replaced component, if any.
    pub fn attach<T: Component>(&mut self, component: T) -> Option<T> {
        let id = component_id::<T>();
        self.bits.insert(id as usize);
        self.components
            .insert(id, Box::new(component))
            .and_then(|previous| previous.downcast::<T>().ok())
            .map(|previous| *previous)
    }

    /// Remove the component of kind `T`. Detaching an absent kind does nothing.
    pub fn detach<T: Component>(&mut self) -> Option<T> {
        let id = component_id::<T>();
        self.bits.remove(id as usize);
        self.components
            .remove(&id)
            .and_then(|previous| previous.downcast::<T>().ok())
            .map(|previous| *previous)
    }

    #[inline]
    pub fn has<T: Component>(&self) -> bool {
        self.bits.get(component_id::<T>() as usize)
    }

    /// Whether every kind in `S` is attached.
    pub fn has_all<S: ComponentSet>(&self) -> bool {
        self.bits.contains_all(&S::bits())
    }

    /// The attached component of kind `T`.
    ///
    /// # Panics
    /// Panics if no such component is attached. Callers are expected to have
    /// checked [`has`](Self::has) or to be gated by a family that requires `T`.
    pub fn get<T: Component>(&self) -> &T {
        self.try_get::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access to the attached component of kind `T`.
    ///
    /// # Panics
    /// Panics if no such component is attached.
    pub fn get_mut<T: Component>(&mut self) -> &mut T {
        self.try_get_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_get<T: Component>(&self) -> Result<&T, EcsError> {
        let id = component_id::<T>();
        if !self.bits.get(id as usize) {
            return Err(EcsError::MissingComponent { component: T::NAME });
        }
        self.components
            .get(&id)
            .and_then(|component| component.downcast_ref::<T>())
            .ok_or(EcsError::MissingComponent { component: T::NAME })
    }

    pub fn try_get_mut<T: Component>(&mut self) -> Result<&mut T, EcsError> {
        let id = component_id::<T>();
        if !self.bits.get(id as usize) {
            return Err(EcsError::MissingComponent { component: T::NAME });
        }
        self.components
            .get_mut(&id)
            .and_then(|component| component.downcast_mut::<T>())
            .ok_or(EcsError::MissingComponent { component: T::NAME })
    }

    /// Presence mask of attached component kinds.
    #[inline]
    pub fn bits(&self) -> &BitSet {
        &self.bits
    }

    /// Number of attached components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self
            .bits
            .ones()
            .map(|id| crate::ecs::name_of(id as ComponentId).unwrap_or("<unknown>"))
            .collect();
        f.debug_struct("Entity").field("components", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_component;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Position {
        x: f64,
        y: f64,
    }
    define_component!(Position);

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Velocity {
        x: f64,
        y: f64,
    }
    define_component!(Velocity);

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Frozen;
    define_component!(Frozen);

    #[test]
    fn test_attach_then_detach() {
        let mut entity = Entity::new();
        assert!(!entity.has::<Position>());

        assert_eq!(entity.attach(Position { x: 1.0, y: 2.0 }), None);
        assert!(entity.has::<Position>());
        assert_eq!(entity.get::<Position>(), &Position { x: 1.0, y: 2.0 });
        assert!(entity.bits().get(Position::id() as usize));

        assert_eq!(entity.detach::<Position>(), Some(Position { x: 1.0, y: 2.0 }));
        assert!(!entity.has::<Position>());
        assert!(!entity.bits().get(Position::id() as usize));
        assert!(entity.is_empty());
    }

    #[test]
    fn test_attach_overwrites_same_kind() {
        let mut entity = Entity::new().with(Position { x: 0.0, y: 0.0 });
        let previous = entity.attach(Position { x: 5.0, y: 5.0 });

        assert_eq!(previous, Some(Position { x: 0.0, y: 0.0 }));
        assert_eq!(entity.get::<Position>().x, 5.0);
        assert_eq!(entity.len(), 1);
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let mut entity = Entity::new().with(Velocity { x: 1.0, y: 0.0 });
        assert_eq!(entity.detach::<Frozen>(), None);
        assert!(entity.has::<Velocity>());
        assert_eq!(entity.len(), 1);
    }

    #[test]
    fn test_has_all_uses_mask() {
        let entity = Entity::new()
            .with(Position { x: 0.0, y: 0.0 })
            .with(Velocity { x: 1.0, y: 1.0 });

        assert!(entity.has_all::<(Position, Velocity)>());
        assert!(!entity.has_all::<(Position, Frozen)>());
        assert!(entity.has_all::<()>());
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut entity = Entity::new().with(Velocity { x: 1.0, y: 1.0 });
        entity.get_mut::<Velocity>().x = -3.0;
        assert_eq!(entity.get::<Velocity>().x, -3.0);
    }

    #[test]
    fn test_try_get_reports_missing_component() {
        let entity = Entity::new();
        let err = entity.try_get::<Frozen>().unwrap_err();
        assert_eq!(err, EcsError::MissingComponent { component: "Frozen" });
    }

    #[test]
    #[should_panic(expected = "Velocity")]
    fn test_get_absent_panics() {
        let entity = Entity::new().with(Position { x: 0.0, y: 0.0 });
        let _ = entity.get::<Velocity>();
    }
}
