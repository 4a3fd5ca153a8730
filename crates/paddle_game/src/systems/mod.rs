//! Gameplay systems, in the order the game registers them.

mod collision;
mod control;
mod movement;
mod render;
mod scoring;

pub use collision::PaddleCollision;
pub use control::{EnemyAi, PlayerControl};
pub use movement::MovementSystem;
pub use render::RenderSystem;
pub use scoring::ScoringSystem;
