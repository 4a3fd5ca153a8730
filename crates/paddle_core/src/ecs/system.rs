//! Systems: per-tick behaviour over the entities matching a family
//!
//! A system implements one or both per-entity hooks. The engine wraps each
//! one in a [`SystemRunner`], which recomputes the matching entities on every
//! update and replays that snapshot during the draw pass.

use crate::ecs::{EntityId, Family, World};
use crate::surface::Surface;
use crate::time::Tick;
use paddle_metrics::SystemProfiler;

/// Per-tick behaviour. Both hooks default to doing nothing.
pub trait System {
    /// Name used in logs and profiling.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Entities this system runs on. Queried once, at registration.
    fn family(&self) -> Family {
        Family::all()
    }

    /// Called once per matching entity during the update pass.
    fn update_entity(&mut self, _entity: EntityId, _world: &mut World, _tick: Tick) {}

    /// Called once per matching entity during the draw pass.
    fn draw_entity(
        &self,
        _entity: EntityId,
        _world: &World,
        _surface: &mut dyn Surface,
        _tick: Tick,
    ) {
    }
}

/// A registered system together with its family and latest match snapshot.
pub struct SystemRunner {
    name: String,
    family: Family,
    matches: Vec<EntityId>,
    system: Box<dyn System>,
}

impl SystemRunner {
    pub fn new<S: System + 'static>(system: S) -> Self {
        Self {
            name: system.name().to_string(),
            family: system.family(),
            matches: Vec::new(),
            system: Box::new(system),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entities matched by the most recent update.
    pub fn matches(&self) -> &[EntityId] {
        &self.matches
    }

    /// Recompute the match set from the live world, then run the update hook
    /// on each match in arena order. The previous snapshot is discarded.
    pub fn update(&mut self, world: &mut World, tick: Tick) {
        let Self {
            name,
            family,
            matches,
            system,
        } = self;
        run_update(name, family, matches, system.as_mut(), world, tick);
    }

    /// [`update`](Self::update), with the time spent charged to this
    /// system's name in `profiler`.
    pub fn update_profiled(&mut self, world: &mut World, tick: Tick, profiler: &mut SystemProfiler) {
        let Self {
            name,
            family,
            matches,
            system,
        } = self;
        let name = name.as_str();
        profiler.time_system(name, || {
            run_update(name, family, matches, system.as_mut(), world, tick)
        });
    }

    /// Run the draw hook over the snapshot taken by the last update.
    ///
    /// Membership is not recomputed: entities that started matching after
    /// the update wait for the next one. Entities that stopped matching
    /// during the update are skipped.
    pub fn draw(&self, world: &World, surface: &mut dyn Surface, tick: Tick) {
        for &entity in &self.matches {
            if world
                .entity(entity)
                .is_some_and(|candidate| self.family.matches(candidate))
            {
                self.system.draw_entity(entity, world, surface, tick);
            }
        }
    }
}

fn run_update(
    name: &str,
    family: &Family,
    matches: &mut Vec<EntityId>,
    system: &mut dyn System,
    world: &mut World,
    tick: Tick,
) {
    *matches = world.matching(family);
    tracing::trace!(system = name, tick, matches = matches.len(), "update");

    for &entity in matches.iter() {
        system.update_entity(entity, world, tick);
    }
}

/// Update-only system backed by a closure.
pub struct UpdateFn<F> {
    name: &'static str,
    family: Family,
    hook: F,
}

impl<F> UpdateFn<F>
where
    F: FnMut(EntityId, &mut World, Tick),
{
    pub fn new(name: &'static str, family: Family, hook: F) -> Self {
        Self { name, family, hook }
    }
}

impl<F> System for UpdateFn<F>
where
    F: FnMut(EntityId, &mut World, Tick),
{
    fn name(&self) -> &str {
        self.name
    }

    fn family(&self) -> Family {
        self.family.clone()
    }

    fn update_entity(&mut self, entity: EntityId, world: &mut World, tick: Tick) {
        (self.hook)(entity, world, tick);
    }
}

/// Draw-only system backed by a closure.
pub struct DrawFn<F> {
    name: &'static str,
    family: Family,
    hook: F,
}

impl<F> DrawFn<F>
where
    F: Fn(EntityId, &World, &mut dyn Surface, Tick),
{
    pub fn new(name: &'static str, family: Family, hook: F) -> Self {
        Self { name, family, hook }
    }
}

impl<F> System for DrawFn<F>
where
    F: Fn(EntityId, &World, &mut dyn Surface, Tick),
{
    fn name(&self) -> &str {
        self.name
    }

    fn family(&self) -> Family {
        self.family.clone()
    }

    fn draw_entity(&self, entity: EntityId, world: &World, surface: &mut dyn Surface, tick: Tick) {
        (self.hook)(entity, world, surface, tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_component;
    use crate::ecs::Entity;
    use crate::surface::RecordingSurface;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Glowing;
    define_component!(Glowing);

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Size(i32);
    define_component!(Size);

    struct DimOnUpdate;

    impl System for DimOnUpdate {
        fn family(&self) -> Family {
            Family::of::<(Glowing, Size)>()
        }

        fn update_entity(&mut self, entity: EntityId, world: &mut World, _tick: Tick) {
            world[entity].detach::<Glowing>();
        }

        fn draw_entity(&self, entity: EntityId, world: &World, surface: &mut dyn Surface, _tick: Tick) {
            let size = world[entity].get::<Size>().0;
            surface.fill_rect(0, 0, size, size);
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        let runner = SystemRunner::new(DimOnUpdate);
        assert!(runner.name().ends_with("DimOnUpdate"));
    }

    #[test]
    fn test_update_recomputes_matches() {
        let mut world = World::new();
        let lit = world.spawn(Entity::new().with(Glowing).with(Size(4)));
        let unlit = world.spawn(Entity::new().with(Size(2)));

        let mut runner = SystemRunner::new(UpdateFn::new(
            "noop",
            Family::of::<(Glowing,)>(),
            |_, _, _| {},
        ));
        runner.update(&mut world, 0);
        assert_eq!(runner.matches(), &[lit]);

        world[unlit].attach(Glowing);
        assert_eq!(runner.matches(), &[lit]);
        runner.update(&mut world, 1);
        assert_eq!(runner.matches(), &[lit, unlit]);
    }

    #[test]
    fn test_profiled_update_matches_plain_update() {
        let mut world = World::new();
        let lit = world.spawn(Entity::new().with(Glowing).with(Size(4)));
        world.spawn(Entity::new().with(Size(2)));

        let mut runner = SystemRunner::new(DimOnUpdate);
        let mut profiler = SystemProfiler::new();
        runner.update_profiled(&mut world, 0, &mut profiler);

        assert_eq!(runner.matches(), &[lit]);
        assert!(!world[lit].has::<Glowing>());
        #[cfg(feature = "metrics")]
        assert_eq!(profiler.slowest().map(|(name, _)| name), Some(runner.name()));
    }

    #[test]
    fn test_draw_skips_entities_disqualified_during_update() {
        let mut world = World::new();
        world.spawn(Entity::new().with(Glowing).with(Size(4)));

        let mut runner = SystemRunner::new(DimOnUpdate);
        let mut surface = RecordingSurface::new(10, 10);

        runner.update(&mut world, 0);
        runner.draw(&world, &mut surface, 0);
        assert_eq!(surface.filled_rects().count(), 0);
    }

    #[test]
    fn test_draw_waits_for_next_update() {
        let mut world = World::new();
        let mut runner = SystemRunner::new(DrawFn::new(
            "sizes",
            Family::of::<(Size,)>(),
            |entity, world: &World, surface: &mut dyn Surface, _| {
                let size = world[entity].get::<Size>().0;
                surface.fill_rect(0, 0, size, size);
            },
        ));
        let mut surface = RecordingSurface::new(10, 10);

        runner.update(&mut world, 0);
        world.spawn(Entity::new().with(Size(3)));
        runner.draw(&world, &mut surface, 0);
        assert_eq!(surface.filled_rects().count(), 0);

        runner.update(&mut world, 1);
        runner.draw(&world, &mut surface, 1);
        assert_eq!(surface.filled_rects().collect::<Vec<_>>(), vec![(0, 0, 3, 3)]);
    }
}
