//! Gameplay components

use paddle_core::define_component;
use paddle_core::math::{DVec2, Rect};
use paddle_core::surface::Color;

/// Position and extent on the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds(pub Rect);
define_component!(Bounds);

/// Displacement applied to [`Bounds`] every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub DVec2);
define_component!(Velocity);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill(pub Color);
define_component!(Fill);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(pub u32);
define_component!(Score);

/// Paddle steered by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player;
define_component!(Player);

/// Paddle steered by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Enemy;
define_component!(Enemy);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ball;
define_component!(Ball);
