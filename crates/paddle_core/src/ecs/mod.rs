//! Entity Component System core types.
//!
//! Components are plain data identified by dense ids assigned on first use.
//! Each entity mirrors its attached kinds in a bit set, and each system's
//! [`Family`] is a pair of bit sets tested against it, so membership checks
//! are a handful of word operations. The [`Engine`] owns the entity arena
//! ([`World`]) and runs systems in registration order, once for update and
//! once for draw, every tick.

mod component;
mod engine;
mod entity;
mod error;
mod family;
mod system;
mod world;

pub use component::{component_id, name_of, registered_count, Component, ComponentId, ComponentSet};
pub use engine::Engine;
pub use entity::{Entity, EntityId};
pub use error::EcsError;
pub use family::Family;
pub use system::{DrawFn, System, SystemRunner, UpdateFn};
pub use world::World;
