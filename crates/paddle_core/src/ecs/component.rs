// component.rs - Runtime component type registry
//
// Components are identified by dense u32 IDs handed out on first use, so an
// entity's presence mask and a family's predicate can both be plain bit sets.

use crate::bitset::BitSet;
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::RwLock;

pub type ComponentId = u32;

/// Trait for component data attached to entities.
///
/// Components are plain records. They must be `'static + Send + Sync` so the
/// engine can store them type-erased. Use [`define_component!`](crate::define_component)
/// to implement it.
pub trait Component: 'static + Sized + Send + Sync {
    /// Human-readable name for debugging.
    const NAME: &'static str;

    /// Dense identifier of this component kind, assigned on first use.
    fn id() -> ComponentId {
        component_id::<Self>()
    }
}

/// Helper macro to implement [`Component`].
///
/// # Example
/// ```ignore
/// #[derive(Clone, Copy)]
/// struct Position { x: f64, y: f64 }
///
/// define_component!(Position);
/// define_component!(Velocity, "Velocity");
/// ```
#[macro_export]
macro_rules! define_component {
    ($ty:ty) => {
        $crate::define_component!($ty, stringify!($ty));
    };
    ($ty:ty, $name:expr) => {
        impl $crate::ecs::Component for $ty {
            const NAME: &'static str = $name;
        }
    };
}

struct Registry {
    ids: HashMap<TypeId, ComponentId>,
    names: Vec<&'static str>,
}

/// Process-wide registry. Only [`component_id`] writes to it, and only to
/// append a kind it has not seen before.
static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| {
    RwLock::new(Registry {
        ids: HashMap::new(),
        names: Vec::new(),
    })
});

/// Stable identifier for component kind `T`, assigning the next unused one
/// (starting at 0) the first time `T` is seen.
pub fn component_id<T: Component>() -> ComponentId {
    let type_id = TypeId::of::<T>();
    if let Some(&id) = read_registry().ids.get(&type_id) {
        return id;
    }

    let mut registry = REGISTRY.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    // Another caller may have registered `T` between the two locks.
    if let Some(&id) = registry.ids.get(&type_id) {
        return id;
    }

    let id = registry.names.len() as ComponentId;
    registry.names.push(T::NAME);
    registry.ids.insert(type_id, id);
    tracing::debug!(component = T::NAME, id, "registered component type");
    id
}

/// Name recorded for a component id, if it has been assigned.
pub fn name_of(id: ComponentId) -> Option<&'static str> {
    read_registry().names.get(id as usize).copied()
}

/// Number of component kinds registered so far.
pub fn registered_count() -> usize {
    read_registry().names.len()
}

fn read_registry() -> std::sync::RwLockReadGuard<'static, Registry> {
    // The registry is append-only, so a poisoned lock still holds valid ids.
    REGISTRY.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A group of component kinds, used to build required/excluded masks and for
/// multi-kind presence queries. Implemented for `()` and tuples of up to eight
/// components.
pub trait ComponentSet {
    /// Ids of the kinds in the group, in declaration order.
    fn ids() -> Vec<ComponentId>;

    /// Names of the kinds in the group, in declaration order.
    fn names() -> Vec<&'static str>;

    /// Bit set with exactly the bits for this group's ids.
    fn bits() -> BitSet {
        let mut bits = BitSet::new();
        for id in Self::ids() {
            bits.insert(id as usize);
        }
        bits
    }
}

impl ComponentSet for () {
    fn ids() -> Vec<ComponentId> {
        Vec::new()
    }

    fn names() -> Vec<&'static str> {
        Vec::new()
    }
}

macro_rules! impl_component_set {
    ($($ty:ident),+) => {
        impl<$($ty: Component),+> ComponentSet for ($($ty,)+) {
            fn ids() -> Vec<ComponentId> {
                vec![$(component_id::<$ty>()),+]
            }

            fn names() -> Vec<&'static str> {
                vec![$($ty::NAME),+]
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
