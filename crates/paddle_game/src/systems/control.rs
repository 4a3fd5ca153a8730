use crate::components::{Ball, Bounds, Enemy, Player, Velocity};
use paddle_core::ecs::{EntityId, Family, System, World};
use paddle_core::time::Tick;
use paddle_services::input::Pointer;

/// Steers the player paddle towards the pointer.
pub struct PlayerControl {
    pointer: Pointer,
    response: f64,
}

impl PlayerControl {
    /// `response` divides the pointer offset; larger values make the paddle
    /// lazier.
    pub fn new(pointer: Pointer, response: f64) -> Self {
        Self { pointer, response }
    }
}

impl System for PlayerControl {
    fn name(&self) -> &str {
        "player_control"
    }

    fn family(&self) -> Family {
        Family::of::<(Player,)>()
    }

    fn update_entity(&mut self, entity: EntityId, world: &mut World, _tick: Tick) {
        let entity = &mut world[entity];
        let y = entity.get::<Bounds>().0.y();
        entity.get_mut::<Velocity>().0.y = (self.pointer.position().y - y) / self.response;
    }
}

/// Computer paddle that tracks the ball, slower the further away it is.
pub struct EnemyAi {
    distance_damping: f64,
}

impl EnemyAi {
    pub fn new(distance_damping: f64) -> Self {
        Self { distance_damping }
    }
}

impl System for EnemyAi {
    fn name(&self) -> &str {
        "enemy_ai"
    }

    fn family(&self) -> Family {
        Family::of::<(Enemy,)>()
    }

    fn update_entity(&mut self, entity: EntityId, world: &mut World, _tick: Tick) {
        let Some(ball) = world.first_with::<(Ball, Bounds)>() else {
            return;
        };
        let target = world[ball].get::<Bounds>().0.center;

        let entity = &mut world[entity];
        let center = entity.get::<Bounds>().0.center;
        let slowdown = 1.0 + target.distance(center) / self.distance_damping;
        entity.get_mut::<Velocity>().0.y = (target.y - center.y) / slowdown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddle_core::ecs::Entity;
    use paddle_core::math::{DVec2, Rect};

    fn paddle(center: DVec2) -> Entity {
        Entity::new()
            .with(Bounds(Rect::new(center, DVec2::new(20.0, 100.0))))
            .with(Velocity::default())
    }

    #[test]
    fn test_player_follows_pointer() {
        let mut world = World::new();
        let player = world.spawn(paddle(DVec2::new(700.0, 300.0)).with(Player));
        let pointer = Pointer::new(DVec2::new(0.0, 400.0));

        let mut system = PlayerControl::new(pointer.clone(), 10.0);
        system.update_entity(player, &mut world, 0);
        assert_eq!(world[player].get::<Velocity>().0.y, 10.0);

        pointer.set(DVec2::new(0.0, 250.0));
        system.update_entity(player, &mut world, 1);
        assert_eq!(world[player].get::<Velocity>().0.y, -5.0);
    }

    #[test]
    fn test_enemy_tracks_ball() {
        let mut world = World::new();
        let enemy = world.spawn(paddle(DVec2::new(100.0, 300.0)).with(Enemy));
        world.spawn(
            Entity::new()
                .with(Ball)
                .with(Bounds(Rect::new(DVec2::new(100.0, 330.0), DVec2::splat(20.0)))),
        );

        EnemyAi::new(10.0).update_entity(enemy, &mut world, 0);

        // distance 30 => slowdown 1 + 30 / 10
        assert_eq!(world[enemy].get::<Velocity>().0.y, 7.5);
    }

    #[test]
    fn test_enemy_idles_without_ball() {
        let mut world = World::new();
        let enemy = world.spawn(
            Entity::new()
                .with(Enemy)
                .with(Bounds(Rect::new(DVec2::new(100.0, 300.0), DVec2::new(20.0, 100.0))))
                .with(Velocity(DVec2::new(0.0, 3.0))),
        );

        EnemyAi::new(10.0).update_entity(enemy, &mut world, 0);
        assert_eq!(world[enemy].get::<Velocity>().0.y, 3.0);
    }
}
