//! Paddle Game
//!
//! Two paddles and a ball on top of the paddle ECS. The player paddle on the
//! right follows the pointer, the computer paddle on the left tracks the
//! ball, and a point is scored whenever the ball leaves the playfield.

pub mod components;
pub mod game;
pub mod systems;

pub use game::PaddleGame;
