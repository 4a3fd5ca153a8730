//! Game setup and the per-frame entry points

use crate::components::{Ball, Bounds, Enemy, Fill, Player, Score, Velocity};
use crate::systems::{
    EnemyAi, MovementSystem, PaddleCollision, PlayerControl, RenderSystem, ScoringSystem,
};
use paddle_core::ecs::{Engine, EntityId};
use paddle_core::math::{DVec2, Rect};
use paddle_core::spawn;
use paddle_core::surface::Surface;
use paddle_core::time::Tick;
use paddle_services::input::Pointer;
use paddle_services::settings::Settings;

/// Horizontal offset of each score from the centre line.
const SCORE_OFFSET: i32 = 80;
const SCORE_BASELINE: i32 = 50;

const NET_WIDTH: i32 = 4;
const NET_DASH: i32 = 10;

/// Two paddles, one ball, and the systems that drive them.
pub struct PaddleGame {
    engine: Engine,
    settings: Settings,
    player: EntityId,
    enemy: EntityId,
    ball: EntityId,
}

impl PaddleGame {
    pub fn new(settings: Settings, pointer: Pointer) -> Self {
        let mut engine = Engine::new();
        let (width, height) = (settings.width(), settings.height());
        let middle = DVec2::new(width / 2.0, height / 2.0);
        let paddle_size = DVec2::new(settings.paddle.width, settings.paddle.height);

        engine.add_system(MovementSystem::new(height));
        engine.add_system(RenderSystem);
        engine.add_system(PlayerControl::new(pointer, settings.paddle.player_response));
        engine.add_system(EnemyAi::new(settings.paddle.enemy_distance_damping));
        engine.add_system(PaddleCollision::new(
            settings.ball.restitution,
            settings.ball.spin_jitter,
            settings.seed,
        ));
        engine.add_system(ScoringSystem::new(
            width,
            height,
            settings.ball.serve_speed,
            settings.seed.wrapping_add(1),
        ));

        let player = spawn!(
            engine,
            Player,
            Bounds(Rect::new(
                DVec2::new(width - settings.paddle.inset, middle.y),
                paddle_size
            )),
            Velocity::default(),
            Fill(settings.colors.player),
            Score(0),
        );
        let enemy = spawn!(
            engine,
            Enemy,
            Bounds(Rect::new(DVec2::new(settings.paddle.inset, middle.y), paddle_size)),
            Velocity::default(),
            Fill(settings.colors.enemy),
            Score(0),
        );
        let ball = spawn!(
            engine,
            Ball,
            Bounds(Rect::new(middle, DVec2::splat(settings.ball.size))),
            Velocity(DVec2::splat(settings.ball.serve_speed)),
            Fill(settings.colors.ball),
        );

        tracing::info!(
            width = settings.playfield.width,
            height = settings.playfield.height,
            seed = settings.seed,
            "game ready"
        );

        Self {
            engine,
            settings,
            player,
            enemy,
            ball,
        }
    }

    pub fn update(&mut self, tick: Tick) {
        self.engine.update(tick);
    }

    /// Draw the entities, then the score board and the centre net on top.
    pub fn draw(&self, surface: &mut dyn Surface, tick: Tick) {
        self.engine.draw(surface, tick);

        let width = self.settings.playfield.width as i32;
        let height = self.settings.playfield.height as i32;
        let (player, enemy) = self.scores();

        surface.set_color(self.settings.colors.hud);
        surface.draw_text(&player.to_string(), width / 2 + SCORE_OFFSET, SCORE_BASELINE);
        surface.draw_text(&enemy.to_string(), width / 2 - SCORE_OFFSET, SCORE_BASELINE);

        surface.set_color(self.settings.colors.hud.with_alpha(64));
        for y in (0..height).step_by(2 * NET_DASH as usize) {
            surface.fill_rect(width / 2 - NET_WIDTH / 2, y, NET_WIDTH, NET_DASH);
        }
    }

    /// `(player, enemy)` points.
    pub fn scores(&self) -> (u32, u32) {
        let world = self.engine.world();
        (
            world[self.player].get::<Score>().0,
            world[self.enemy].get::<Score>().0,
        )
    }

    pub fn ball(&self) -> EntityId {
        self.ball
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddle_core::surface::{DrawCommand, RecordingSurface};

    fn game() -> PaddleGame {
        PaddleGame::new(Settings::default(), Pointer::new(DVec2::new(0.0, 300.0)))
    }

    #[test]
    fn test_setup_places_entities() {
        let game = game();
        let world = game.engine().world();

        assert_eq!(world.len(), 3);
        assert_eq!(world[game.player].get::<Bounds>().0.center, DVec2::new(700.0, 300.0));
        assert_eq!(world[game.enemy].get::<Bounds>().0.center, DVec2::new(100.0, 300.0));
        assert_eq!(world[game.ball].get::<Velocity>().0, DVec2::new(4.0, 4.0));
        assert_eq!(game.scores(), (0, 0));
    }

    #[test]
    fn test_systems_registered_in_order() {
        let game = game();
        let names: Vec<_> = game.engine().systems().map(|runner| runner.name()).collect();
        assert_eq!(
            names,
            [
                "movement",
                "render",
                "player_control",
                "enemy_ai",
                "paddle_collision",
                "scoring"
            ]
        );
    }

    #[test]
    fn test_draw_adds_hud_after_entities() {
        let mut game = game();
        let mut surface = RecordingSurface::new(800, 600);
        game.update(0);
        game.draw(&mut surface, 0);

        let texts: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, x, y } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(texts, [("0", 480, 50), ("0", 320, 50)]);

        // three entities, then 30 net dashes
        let rects: Vec<_> = surface.filled_rects().collect();
        assert_eq!(rects.len(), 3 + 30);
        assert_eq!(rects[3], (398, 0, 4, 10));
    }
}
