//! Settings management

use paddle_core::surface::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Highest accepted tick rate.
pub const MAX_TICK_RATE_HZ: u32 = 1000;

/// Highest accepted output scale.
pub const MAX_SCALE: u32 = 8;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings. Every field has a default, so a settings file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playfield: PlayfieldSettings,
    pub timing: TimingSettings,
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub colors: ColorSettings,
    /// Seed for serve directions and bounce jitter.
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldSettings {
    pub width: u32,
    pub height: u32,
    /// Output pixels per playfield unit. The pointer is mapped back by the
    /// same factor.
    pub scale: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    pub tick_rate_hz: u32,
    /// Stop after this many ticks. Runs until killed when absent.
    pub max_ticks: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub size: f64,
    /// Speed along each axis when the ball is served.
    pub serve_speed: f64,
    /// Velocity multiplier applied on every paddle hit.
    pub restitution: f64,
    /// Maximum vertical nudge added on a paddle hit.
    pub spin_jitter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f64,
    pub height: f64,
    /// Distance of each paddle's centre from its side wall.
    pub inset: f64,
    /// Divisor applied to the pointer offset when steering the player paddle.
    pub player_response: f64,
    /// Distance scale at which the computer paddle halves its tracking speed.
    pub enemy_distance_damping: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub background: Color,
    pub player: Color,
    pub enemy: Color,
    pub ball: Color,
    pub hud: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: PlayfieldSettings::default(),
            timing: TimingSettings::default(),
            ball: BallSettings::default(),
            paddle: PaddleSettings::default(),
            colors: ColorSettings::default(),
            seed: 0x5EED,
        }
    }
}

impl Default for PlayfieldSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 1,
        }
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            tick_rate_hz: paddle_core::time::TICK_RATE_HZ,
            max_ticks: None,
        }
    }
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            size: 20.0,
            serve_speed: 4.0,
            restitution: 1.04,
            spin_jitter: 0.5,
        }
    }
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 100.0,
            inset: 100.0,
            player_response: 10.0,
            enemy_distance_damping: 10.0,
        }
    }
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            player: Color::BLUE,
            enemy: Color::RED,
            ball: Color::WHITE,
            hud: Color::WHITE.with_alpha(102),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.playfield.width == 0 || self.playfield.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "playfield must be non-empty, got {}x{}",
                self.playfield.width, self.playfield.height
            )));
        }
        if !(1..=MAX_SCALE).contains(&self.playfield.scale) {
            return Err(SettingsError::Invalid(format!(
                "playfield scale must be between 1 and {MAX_SCALE}, got {}",
                self.playfield.scale
            )));
        }
        if !(1..=MAX_TICK_RATE_HZ).contains(&self.timing.tick_rate_hz) {
            return Err(SettingsError::Invalid(format!(
                "tick rate must be between 1 and {MAX_TICK_RATE_HZ} Hz, got {}",
                self.timing.tick_rate_hz
            )));
        }

        let positive = [
            ("ball.size", self.ball.size),
            ("ball.serve_speed", self.ball.serve_speed),
            ("ball.restitution", self.ball.restitution),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("paddle.player_response", self.paddle.player_response),
            ("paddle.enemy_distance_damping", self.paddle.enemy_distance_damping),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }
        if !self.ball.spin_jitter.is_finite() || self.ball.spin_jitter < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "ball.spin_jitter must not be negative, got {}",
                self.ball.spin_jitter
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.playfield.width as f64
    }

    pub fn height(&self) -> f64 {
        self.playfield.height as f64
    }
}
