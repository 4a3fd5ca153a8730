//! Paddle Runtime
//!
//! Headless binary: loads settings, builds the game and runs the fixed-rate
//! loop.
//!
//! Usage: `paddle [settings.json]`

mod driver;

use anyhow::{Context, Result};
use driver::FixedStepDriver;
use paddle_services::settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Paddle Engine v{}", paddle_core::VERSION);

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("failed to load settings from {path}"))?,
        None => {
            tracing::info!("no settings file given, using defaults");
            Settings::default()
        }
    };

    FixedStepDriver::new(settings).run();

    Ok(())
}
