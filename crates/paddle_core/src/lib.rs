//! Paddle Engine Core
//!
//! Contains the fundamental simulation pieces:
//! - Growable bit sets used as component masks and query predicates
//! - Entity Component System (ECS) with ordered update/draw passes
//! - Fixed-rate time, geometry and deterministic randomness
//! - Drawing surface abstraction

pub mod bitset;
pub mod ecs;
pub mod math;
pub mod surface;
pub mod time;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
