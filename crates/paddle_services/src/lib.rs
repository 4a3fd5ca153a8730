//! Paddle Services Layer
//!
//! Platform-facing pieces the game consumes: settings loaded from disk and
//! pointer input written by the driver.

pub mod input;
pub mod settings;

pub use input::{InputState, Pointer};
pub use settings::{Settings, SettingsError};
