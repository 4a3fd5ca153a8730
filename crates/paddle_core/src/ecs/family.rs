//! Families: the query predicate systems use to pick their entities

use crate::bitset::BitSet;
use crate::ecs::{ComponentSet, Entity};

/// A pair of masks deciding whether an entity qualifies for a system.
///
/// An entity matches when it has every required kind and none of the
/// excluded ones. A family with no required kinds matches every entity not
/// ruled out by its exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    required: BitSet,
    excluded: BitSet,
}

impl Family {
    /// Family requiring every kind in `S`.
    pub fn of<S: ComponentSet>() -> Self {
        Self {
            required: S::bits(),
            excluded: BitSet::new(),
        }
    }

    /// Family matching every entity.
    pub fn all() -> Self {
        Self::default()
    }

    /// Rule out entities having any kind in `S`.
    ///
    /// Replaces the excluded set; calling this twice keeps only the second set.
    pub fn excluding<S: ComponentSet>(mut self) -> Self {
        self.excluded = S::bits();
        self
    }

    #[inline]
    pub fn matches(&self, entity: &Entity) -> bool {
        let bits = entity.bits();
        bits.contains_all(&self.required) && !bits.contains_any(&self.excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_component;

    struct Position;
    define_component!(Position);

    struct Velocity;
    define_component!(Velocity);

    struct PlayerTag;
    define_component!(PlayerTag);

    struct Ball;
    define_component!(Ball);

    #[test]
    fn test_required_and_excluded() {
        let family = Family::of::<(Position, Velocity)>().excluding::<(Ball,)>();

        let mut entity = Entity::new()
            .with(Position)
            .with(Velocity)
            .with(PlayerTag);
        assert!(family.matches(&entity));

        entity.attach(Ball);
        assert!(!family.matches(&entity));

        entity.detach::<Ball>();
        assert!(family.matches(&entity));
    }

    #[test]
    fn test_missing_required_kind() {
        let family = Family::of::<(Position, Velocity)>();
        let entity = Entity::new().with(Position);
        assert!(!family.matches(&entity));
    }

    #[test]
    fn test_empty_family_matches_everything() {
        let family = Family::all();
        assert!(family.matches(&Entity::new()));
        assert!(family.matches(&Entity::new().with(Ball)));

        let no_balls = Family::all().excluding::<(Ball,)>();
        assert!(no_balls.matches(&Entity::new().with(Position)));
        assert!(!no_balls.matches(&Entity::new().with(Ball)));
    }

    #[test]
    fn test_excluding_replaces_previous_set() {
        let family = Family::of::<(Position,)>()
            .excluding::<(Ball,)>()
            .excluding::<(PlayerTag,)>();

        assert!(family.matches(&Entity::new().with(Position).with(Ball)));
        assert!(!family.matches(&Entity::new().with(Position).with(PlayerTag)));
    }
}
