use crate::components::{Bounds, Velocity};
use paddle_core::ecs::{EntityId, Family, System, World};
use paddle_core::time::Tick;

/// Integrates velocity and bounces off the top and bottom walls.
///
/// The side walls are left open so the ball can leave the playfield and be
/// picked up by [`ScoringSystem`](super::ScoringSystem).
pub struct MovementSystem {
    height: f64,
}

impl MovementSystem {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl System for MovementSystem {
    fn name(&self) -> &str {
        "movement"
    }

    fn family(&self) -> Family {
        Family::of::<(Bounds, Velocity)>()
    }

    fn update_entity(&mut self, entity: EntityId, world: &mut World, _tick: Tick) {
        let entity = &mut world[entity];
        let velocity = entity.get::<Velocity>().0;

        let bounds = &mut entity.get_mut::<Bounds>().0;
        bounds.center += velocity;
        if bounds.limit_y(0.0, self.height) {
            entity.get_mut::<Velocity>().0.y *= -1.0;
        }
    }
}
