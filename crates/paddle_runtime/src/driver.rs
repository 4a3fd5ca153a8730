//! Fixed-rate headless game loop

use paddle_core::math::DVec2;
use paddle_core::surface::{Color, RecordingSurface, ScaledSurface};
use paddle_core::time::{SimulationTime, Tick};
use paddle_game::PaddleGame;
use paddle_metrics::FrameTimer;
use paddle_services::input::Pointer;
use paddle_services::settings::Settings;
use std::time::Duration;

/// Seconds of simulated time between statistics reports.
const REPORT_INTERVAL_SECS: u64 = 2;

/// Ticks the scripted cursor takes to cross the playfield once.
const SWEEP_TICKS: u64 = 90;

/// Cursor position for `tick` on a `width` x `height` output: parked at the
/// horizontal centre, sweeping down and back up.
pub fn scripted_pointer(tick: Tick, width: f64, height: f64) -> DVec2 {
    let phase = tick % (2 * SWEEP_TICKS);
    let travelled = if phase < SWEEP_TICKS {
        phase
    } else {
        2 * SWEEP_TICKS - phase
    };
    DVec2::new(width / 2.0, height * travelled as f64 / SWEEP_TICKS as f64)
}

/// Drives the game one tick at a time: pointer, update, clear, draw, sleep.
pub struct FixedStepDriver {
    game: PaddleGame,
    pointer: Pointer,
    surface: RecordingSurface,
    time: SimulationTime,
    frame_timer: FrameTimer,
    scale: u32,
    background: Color,
    max_ticks: Option<u64>,
    report_every: u64,
    paced: bool,
}

impl FixedStepDriver {
    pub fn new(settings: Settings) -> Self {
        let pointer = Pointer::new(DVec2::new(settings.width() / 2.0, settings.height() / 2.0));
        let scale = settings.playfield.scale;
        let surface = RecordingSurface::new(
            settings.playfield.width.saturating_mul(scale) as i32,
            settings.playfield.height.saturating_mul(scale) as i32,
        );
        let time = SimulationTime::with_rate(settings.timing.tick_rate_hz);
        // one second of frame history
        let frame_timer = FrameTimer::new(
            time.tick_duration(),
            settings.timing.tick_rate_hz as usize,
        );
        let background = settings.colors.background;
        let max_ticks = settings.timing.max_ticks;
        let report_every = u64::from(settings.timing.tick_rate_hz) * REPORT_INTERVAL_SECS;

        Self {
            game: PaddleGame::new(settings, pointer.clone()),
            pointer,
            surface,
            time,
            frame_timer,
            scale,
            background,
            max_ticks,
            report_every,
            paced: true,
        }
    }

    /// Whether to sleep out the remainder of each tick. Tests turn it off.
    pub fn with_pacing(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    /// Run until `max_ticks` is reached, or forever when it is not set.
    pub fn run(&mut self) {
        tracing::info!(
            tick_ms = self.time.tick_duration().as_secs_f64() * 1000.0,
            max_ticks = ?self.max_ticks,
            "starting game loop"
        );

        while self.max_ticks.map_or(true, |max| self.time.tick_count() < max) {
            let remaining = self.step();
            if self.paced {
                std::thread::sleep(remaining);
            }
        }

        let (player, enemy) = self.game.scores();
        tracing::info!(ticks = self.time.tick_count(), player, enemy, "game loop finished");
    }

    /// Advance one tick and return what is left of its time budget.
    pub fn step(&mut self) -> Duration {
        let tick = self.time.tick_count();
        self.frame_timer.begin();

        let cursor = scripted_pointer(
            tick,
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        );
        self.pointer.set_scaled(cursor, self.scale);

        self.game.update(tick);
        self.surface.clear(self.background);
        self.game
            .draw(&mut ScaledSurface::new(&mut self.surface, self.scale as i32), tick);

        self.time.advance_tick();
        let remaining = self.frame_timer.end();

        if self.time.tick_count() % self.report_every == 0 {
            self.report();
        }
        remaining
    }

    fn report(&mut self) {
        let (player, enemy) = self.game.scores();
        let (min_ms, max_ms) = self.frame_timer.frame_time_range_ms();
        let profiler = self.game.engine().profiler();
        let (slowest, slowest_ms) = profiler
            .slowest()
            .map(|(name, time)| (name.to_string(), time.as_secs_f64() * 1000.0))
            .unwrap_or_default();

        tracing::info!(
            tick = self.time.tick_count(),
            fps = self.frame_timer.fps(),
            frame_ms = self.frame_timer.frame_time_ms(),
            min_ms,
            max_ms,
            overruns = self.frame_timer.overruns(),
            player,
            enemy,
            slowest = %slowest,
            slowest_ms,
            "frame stats"
        );

        self.game.engine_mut().profiler_mut().reset();
    }

    pub fn game(&self) -> &PaddleGame {
        &self.game
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn ticks(&self) -> Tick {
        self.time.tick_count()
    }
}
