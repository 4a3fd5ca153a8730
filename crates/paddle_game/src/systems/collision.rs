use crate::components::{Ball, Bounds, Player, Velocity};
use paddle_core::ecs::{EntityId, Family, System, World};
use paddle_core::math::DeterministicRng;
use paddle_core::time::Tick;

/// Bounces the ball off any paddle it overlaps.
///
/// On a hit the ball is pushed back out in front of the paddle, its
/// horizontal direction is reversed, the whole velocity is scaled by the
/// restitution factor and a random vertical nudge is added.
pub struct PaddleCollision {
    restitution: f64,
    spin_jitter: f64,
    rng: DeterministicRng,
}

impl PaddleCollision {
    pub fn new(restitution: f64, spin_jitter: f64, seed: u64) -> Self {
        Self {
            restitution,
            spin_jitter,
            rng: DeterministicRng::new(seed),
        }
    }

    /// Uniform nudge in `[-spin_jitter, spin_jitter)`.
    fn spin(&mut self) -> f64 {
        (self.rng.next_f64() - 0.5) * 2.0 * self.spin_jitter
    }
}

impl System for PaddleCollision {
    fn name(&self) -> &str {
        "paddle_collision"
    }

    fn family(&self) -> Family {
        Family::of::<(Bounds,)>().excluding::<(Ball,)>()
    }

    fn update_entity(&mut self, entity: EntityId, world: &mut World, tick: Tick) {
        let Some(ball) = world.first_with::<(Ball, Bounds, Velocity)>() else {
            return;
        };
        let paddle = world[entity].get::<Bounds>().0;
        let player_side = world[entity].has::<Player>();

        let ball = &mut world[ball];
        let mut velocity = ball.get::<Velocity>().0;
        let bounds = &mut ball.get_mut::<Bounds>().0;
        if !bounds.intersects(&paddle) {
            return;
        }

        if player_side {
            bounds.set_right(paddle.left() - velocity.x);
        } else {
            bounds.set_left(paddle.right() + velocity.x);
        }

        velocity.x = -velocity.x;
        velocity *= self.restitution;
        velocity.y += self.spin();
        ball.get_mut::<Velocity>().0 = velocity;

        tracing::debug!(tick, paddle = %entity, speed = velocity.length(), "ball hit paddle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddle_core::ecs::Entity;
    use paddle_core::math::{DVec2, Rect};

    fn setup(paddle: Entity, ball_center: DVec2, ball_velocity: DVec2) -> (World, EntityId, EntityId) {
        let mut world = World::new();
        let paddle = world.spawn(paddle);
        let ball = world.spawn(
            Entity::new()
                .with(Ball)
                .with(Bounds(Rect::new(ball_center, DVec2::splat(20.0))))
                .with(Velocity(ball_velocity)),
        );
        (world, paddle, ball)
    }

    fn paddle_at(x: f64) -> Entity {
        Entity::new().with(Bounds(Rect::new(DVec2::new(x, 300.0), DVec2::new(20.0, 100.0))))
    }

    #[test]
    fn test_player_paddle_returns_ball() {
        let (mut world, paddle, ball) = setup(
            paddle_at(700.0).with(Player),
            DVec2::new(685.0, 300.0),
            DVec2::new(4.0, 4.0),
        );

        PaddleCollision::new(1.04, 0.0, 1).update_entity(paddle, &mut world, 0);

        assert_eq!(world[ball].get::<Bounds>().0.right(), 686.0);
        assert_eq!(world[ball].get::<Velocity>().0, DVec2::new(-4.0, 4.0) * 1.04);
    }

    #[test]
    fn test_enemy_paddle_returns_ball() {
        let (mut world, paddle, ball) =
            setup(paddle_at(100.0), DVec2::new(115.0, 300.0), DVec2::new(-4.0, 0.0));

        PaddleCollision::new(1.0, 0.0, 1).update_entity(paddle, &mut world, 0);

        assert_eq!(world[ball].get::<Bounds>().0.left(), 106.0);
        assert_eq!(world[ball].get::<Velocity>().0, DVec2::new(4.0, 0.0));
    }

    #[test]
    fn test_miss_leaves_ball_alone() {
        let (mut world, paddle, ball) =
            setup(paddle_at(100.0), DVec2::new(400.0, 300.0), DVec2::new(-4.0, 4.0));

        PaddleCollision::new(1.04, 0.5, 1).update_entity(paddle, &mut world, 0);

        assert_eq!(world[ball].get::<Bounds>().0.center, DVec2::new(400.0, 300.0));
        assert_eq!(world[ball].get::<Velocity>().0, DVec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_spin_stays_within_jitter() {
        let mut system = PaddleCollision::new(1.04, 0.5, 99);
        for _ in 0..1000 {
            let spin = system.spin();
            assert!((-0.5..0.5).contains(&spin));
        }
    }

    #[test]
    fn test_family_skips_ball() {
        let (world, paddle, ball) =
            setup(paddle_at(100.0), DVec2::new(400.0, 300.0), DVec2::ZERO);
        let family = PaddleCollision::new(1.0, 0.0, 0).family();

        assert!(family.matches(&world[paddle]));
        assert!(!family.matches(&world[ball]));
    }
}
