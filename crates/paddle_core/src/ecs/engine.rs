// engine.rs - Owns the world and the ordered system list
//
// One update pass and one draw pass per external tick. Systems run strictly
// in registration order, so later systems see what earlier ones wrote during
// the same tick.

use crate::ecs::{ComponentSet, Entity, EntityId, System, SystemRunner, World};
use crate::surface::Surface;
use crate::time::Tick;
use paddle_metrics::SystemProfiler;

pub struct Engine {
    world: World,
    systems: Vec<SystemRunner>,
    profiler: SystemProfiler,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            systems: Vec::new(),
            profiler: SystemProfiler::new(),
        }
    }

    /// Append an entity to the world.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.world.spawn(entity)
    }

    /// Append a system. Registration order is execution order.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        let runner = SystemRunner::new(system);
        tracing::debug!(
            system = runner.name(),
            order = self.systems.len(),
            "registered system"
        );
        self.systems.push(runner);
    }

    /// Run every system's update pass, in registration order.
    pub fn update(&mut self, tick: Tick) {
        for runner in &mut self.systems {
            runner.update_profiled(&mut self.world, tick, &mut self.profiler);
        }
    }

    /// Run every system's draw pass, in registration order.
    pub fn draw(&self, surface: &mut dyn Surface, tick: Tick) {
        for runner in &self.systems {
            runner.draw(&self.world, surface, tick);
        }
    }

    /// Handles of all entities having every kind in `S`.
    pub fn entities_with<S: ComponentSet>(&self) -> Vec<EntityId> {
        self.world.entities_with::<S>()
    }

    /// First entity having every kind in `S`.
    pub fn first_with<S: ComponentSet>(&self) -> Option<EntityId> {
        self.world.first_with::<S>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Registered systems, in execution order.
    pub fn systems(&self) -> impl Iterator<Item = &SystemRunner> {
        self.systems.iter()
    }

    /// Accumulated update time per system.
    pub fn profiler(&self) -> &SystemProfiler {
        &self.profiler
    }

    pub fn profiler_mut(&mut self) -> &mut SystemProfiler {
        &mut self.profiler
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an entity from components and add it to an engine.
///
/// # Example
/// ```ignore
/// let ball = spawn!(engine, Bounds(rect), Velocity(DVec2::new(4.0, 4.0)), Ball);
/// ```
#[macro_export]
macro_rules! spawn {
    ($engine:expr, $($component:expr),+ $(,)?) => {{
        let entity = $crate::ecs::Entity::new()
            $(.with($component))+;
        $engine.add_entity(entity)
    }};
}
