//! Frame timing against a fixed tick budget

use super::ring_buffer::RingBuffer;
use std::time::{Duration, Instant};

/// Upper bound on recorded frames, whatever history the caller asks for.
pub const MAX_HISTORY: usize = 240;

/// Measures each frame of a fixed-step loop.
///
/// Every frame is compared with the tick budget: [`end`](Self::end) returns
/// how much of the budget is left, which is what the loop sleeps for. A
/// rolling window of recent frame times feeds the fps and overrun figures.
pub struct FrameTimer {
    budget: Duration,
    frame_start: Instant,
    frame_times: RingBuffer<Duration>,
}

impl FrameTimer {
    /// `history` is capped at [`MAX_HISTORY`].
    pub fn new(budget: Duration, history: usize) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
            frame_times: RingBuffer::new(history.min(MAX_HISTORY)),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Record the frame and return the unused part of the budget.
    pub fn end(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        self.frame_times.push(elapsed);
        self.budget.saturating_sub(elapsed)
    }

    pub fn fps(&self) -> f64 {
        let avg = self.frame_times.average().as_secs_f64();
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_times.average().as_secs_f64() * 1000.0
    }

    pub fn frame_time_range_ms(&self) -> (f64, f64) {
        let (min, max) = self.frame_times.min_max();
        (min.as_secs_f64() * 1000.0, max.as_secs_f64() * 1000.0)
    }

    /// Recorded frames that took longer than the budget.
    pub fn overruns(&self) -> usize {
        self.frame_times.count_above(self.budget)
    }

    pub fn recorded(&self) -> usize {
        self.frame_times.len()
    }
}
