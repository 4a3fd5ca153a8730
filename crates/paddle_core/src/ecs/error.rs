use crate::ecs::EntityId;
use thiserror::Error;

/// Errors surfaced by the fallible ECS accessors.
///
/// The panicking accessors (`Entity::get`, `World` indexing) report these
/// same conditions as contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    #[error("component '{component}' is not attached to the entity")]
    MissingComponent { component: &'static str },

    #[error("entity {0} does not exist in this world")]
    UnknownEntity(EntityId),
}
