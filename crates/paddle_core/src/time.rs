//! Fixed-rate simulation time
//!
//! The driver advances one tick per frame at a fixed rate (60 Hz by default)
//! and hands the tick counter to every system.

use std::time::Duration;

/// Monotonically increasing simulation step counter.
pub type Tick = u64;

/// Default simulation tick rate (60 Hz = 16.666ms per tick)
pub const TICK_RATE_HZ: u32 = 60;
pub const TICK_DURATION: Duration = Duration::from_micros(16_666); // ~16.666ms

/// Duration of one tick at `rate_hz` ticks per second.
pub fn tick_duration(rate_hz: u32) -> Duration {
    if rate_hz == TICK_RATE_HZ {
        TICK_DURATION
    } else {
        Duration::from_secs(1) / rate_hz.max(1)
    }
}

/// Simulation time tracker
pub struct SimulationTime {
    tick_count: Tick,
    tick_duration: Duration,
    accumulated_time: Duration,
}

impl SimulationTime {
    pub fn new() -> Self {
        Self::with_rate(TICK_RATE_HZ)
    }

    pub fn with_rate(rate_hz: u32) -> Self {
        Self {
            tick_count: 0,
            tick_duration: tick_duration(rate_hz),
            accumulated_time: Duration::ZERO,
        }
    }

    pub fn tick_count(&self) -> Tick {
        self.tick_count
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub fn advance_tick(&mut self) {
        self.tick_count += 1;
        self.accumulated_time += self.tick_duration;
    }

    pub fn total_time(&self) -> Duration {
        self.accumulated_time
    }
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_fixed_steps() {
        let mut time = SimulationTime::with_rate(50);
        assert_eq!(time.tick_count(), 0);

        time.advance_tick();
        time.advance_tick();
        assert_eq!(time.tick_count(), 2);
        assert_eq!(time.total_time(), Duration::from_millis(40));
    }

    #[test]
    fn test_default_rate() {
        assert_eq!(SimulationTime::new().tick_duration(), TICK_DURATION);
        assert_eq!(tick_duration(0), Duration::from_secs(1));
    }
}
