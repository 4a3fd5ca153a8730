use crate::components::{Ball, Bounds, Enemy, Player, Score, Velocity};
use paddle_core::ecs::{Component, EntityId, Family, System, World};
use paddle_core::math::{DVec2, DeterministicRng};
use paddle_core::time::Tick;

/// Awards a point when the ball is about to leave the playfield sideways,
/// then serves it again from the centre.
///
/// Leaving on the left scores for the player and serves towards the right;
/// leaving on the right scores for the enemy and serves towards the left.
pub struct ScoringSystem {
    width: f64,
    height: f64,
    serve_speed: f64,
    rng: DeterministicRng,
}

impl ScoringSystem {
    pub fn new(width: f64, height: f64, serve_speed: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            serve_speed,
            rng: DeterministicRng::new(seed),
        }
    }

    fn serve(&mut self, horizontal: f64) -> DVec2 {
        let vertical = if self.rng.next_bool() {
            self.serve_speed
        } else {
            -self.serve_speed
        };
        DVec2::new(horizontal, vertical)
    }
}

/// Increment the score of the first entity tagged `T`.
fn credit<T: Component>(world: &mut World) -> Option<u32> {
    let scorer = world.first_with::<(T, Score)>()?;
    let score = world[scorer].get_mut::<Score>();
    score.0 += 1;
    Some(score.0)
}

impl System for ScoringSystem {
    fn name(&self) -> &str {
        "scoring"
    }

    fn family(&self) -> Family {
        Family::of::<(Ball,)>()
    }

    fn update_entity(&mut self, entity: EntityId, world: &mut World, tick: Tick) {
        let bounds = world[entity].get::<Bounds>().0;
        let vx = world[entity].get::<Velocity>().0.x;

        let (scorer, score, serve) = if bounds.left() + vx <= 0.0 {
            ("player", credit::<Player>(world), self.serve_speed)
        } else if bounds.right() + vx >= self.width {
            ("enemy", credit::<Enemy>(world), -self.serve_speed)
        } else {
            return;
        };

        let velocity = self.serve(serve);
        let ball = &mut world[entity];
        ball.get_mut::<Bounds>().0.center = DVec2::new(self.width / 2.0, self.height / 2.0);
        ball.get_mut::<Velocity>().0 = velocity;

        tracing::info!(tick, scorer, ?score, "point scored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddle_core::ecs::Entity;
    use paddle_core::math::Rect;

    fn world_with_ball(center: DVec2, velocity: DVec2) -> (World, EntityId, EntityId, EntityId) {
        let mut world = World::new();
        let player = world.spawn(Entity::new().with(Player).with(Score(0)));
        let enemy = world.spawn(Entity::new().with(Enemy).with(Score(0)));
        let ball = world.spawn(
            Entity::new()
                .with(Ball)
                .with(Bounds(Rect::new(center, DVec2::splat(20.0))))
                .with(Velocity(velocity)),
        );
        (world, player, enemy, ball)
    }

    #[test]
    fn test_left_exit_scores_for_player() {
        let (mut world, player, enemy, ball) =
            world_with_ball(DVec2::new(0.0, 100.0), DVec2::new(-4.0, 4.0));

        ScoringSystem::new(800.0, 600.0, 4.0, 3).update_entity(ball, &mut world, 0);

        assert_eq!(world[player].get::<Score>(), &Score(1));
        assert_eq!(world[enemy].get::<Score>(), &Score(0));
        assert_eq!(world[ball].get::<Bounds>().0.center, DVec2::new(400.0, 300.0));
        let velocity = world[ball].get::<Velocity>().0;
        assert_eq!(velocity.x, 4.0);
        assert_eq!(velocity.y.abs(), 4.0);
    }

    #[test]
    fn test_right_exit_scores_for_enemy() {
        let (mut world, player, enemy, ball) =
            world_with_ball(DVec2::new(795.0, 100.0), DVec2::new(4.0, 4.0));

        ScoringSystem::new(800.0, 600.0, 4.0, 3).update_entity(ball, &mut world, 0);

        assert_eq!(world[player].get::<Score>(), &Score(0));
        assert_eq!(world[enemy].get::<Score>(), &Score(1));
        assert_eq!(world[ball].get::<Velocity>().0.x, -4.0);
    }

    #[test]
    fn test_ball_in_play_is_untouched() {
        let (mut world, player, _, ball) =
            world_with_ball(DVec2::new(400.0, 300.0), DVec2::new(-4.0, 4.0));

        ScoringSystem::new(800.0, 600.0, 4.0, 3).update_entity(ball, &mut world, 0);

        assert_eq!(world[player].get::<Score>(), &Score(0));
        assert_eq!(world[ball].get::<Velocity>().0, DVec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_serve_direction_is_random_but_repeatable() {
        let mut a = ScoringSystem::new(800.0, 600.0, 4.0, 11);
        let mut b = ScoringSystem::new(800.0, 600.0, 4.0, 11);
        let serves: Vec<_> = (0..32).map(|_| a.serve(4.0).y).collect();

        assert!(serves.contains(&4.0) && serves.contains(&-4.0));
        assert_eq!(serves, (0..32).map(|_| b.serve(4.0).y).collect::<Vec<_>>());
    }
}
