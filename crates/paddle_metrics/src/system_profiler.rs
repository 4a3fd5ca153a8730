//! System profiler for timing named systems

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Accumulates wall-clock time per system name until [`reset`](Self::reset).
pub struct SystemProfiler {
    timings: HashMap<String, Duration>,
}

impl SystemProfiler {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
        }
    }

    pub fn time_system<F, R>(&mut self, name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        match self.timings.get_mut(name) {
            Some(total) => *total += elapsed,
            None => {
                self.timings.insert(name.to_string(), elapsed);
            }
        }
        result
    }

    pub fn get_timing(&self, name: &str) -> Duration {
        self.timings.get(name).copied().unwrap_or(Duration::ZERO)
    }

    /// The system with the largest accumulated time, if any were timed.
    pub fn slowest(&self) -> Option<(&str, Duration)> {
        self.timings
            .iter()
            .max_by_key(|(_, duration)| **duration)
            .map(|(name, duration)| (name.as_str(), *duration))
    }

    pub fn reset(&mut self) {
        self.timings.clear();
    }
}

impl Default for SystemProfiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_per_name() {
        let mut profiler = SystemProfiler::new();
        profiler.time_system("movement", || std::thread::sleep(Duration::from_millis(2)));
        profiler.time_system("movement", || std::thread::sleep(Duration::from_millis(2)));
        profiler.time_system("render", || ());

        assert!(profiler.get_timing("movement") >= Duration::from_millis(4));
        assert_eq!(profiler.slowest().map(|(name, _)| name), Some("movement"));
        assert_eq!(profiler.get_timing("missing"), Duration::ZERO);

        profiler.reset();
        assert!(profiler.slowest().is_none());
    }
}
