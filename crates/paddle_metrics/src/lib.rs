//! Paddle Metrics - frame and system timing
//!
//! Provides zero-cost abstractions for metrics collection that completely
//! vanish in production builds via feature flags.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable metrics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use paddle_metrics::{FrameTimer, SystemProfiler};
//!
//! let mut timer = FrameTimer::new(tick_duration, 60); // 60 Hz budget, last 60 frames
//! timer.begin();
//! engine.update(tick);
//! std::thread::sleep(timer.end()); // sleep out the rest of the tick
//! tracing::info!("FPS: {:.1}", timer.fps());
//! ```
//!
//! In production builds (without `metrics` feature), all instrumentation
//! is compiled out to zero overhead.

#[cfg(feature = "metrics")]
mod frame_timer;
#[cfg(feature = "metrics")]
mod ring_buffer;
#[cfg(feature = "metrics")]
mod system_profiler;

#[cfg(feature = "metrics")]
pub use frame_timer::{FrameTimer, MAX_HISTORY};
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;
#[cfg(feature = "metrics")]
pub use system_profiler::SystemProfiler;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

/// Without metrics the timer still measures the current frame, since the
/// driver paces ticks from it, but keeps no history.
#[cfg(not(feature = "metrics"))]
pub struct FrameTimer {
    budget: std::time::Duration,
    frame_start: std::time::Instant,
}

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new(budget: std::time::Duration, _history: usize) -> Self { Self { budget, frame_start: std::time::Instant::now() } }
    pub fn budget(&self) -> std::time::Duration { self.budget }
    pub fn begin(&mut self) { self.frame_start = std::time::Instant::now(); }
    pub fn end(&mut self) -> std::time::Duration { self.budget.saturating_sub(self.frame_start.elapsed()) }
    pub fn fps(&self) -> f64 { 0.0 }
    pub fn frame_time_ms(&self) -> f64 { 0.0 }
    pub fn frame_time_range_ms(&self) -> (f64, f64) { (0.0, 0.0) }
    pub fn overruns(&self) -> usize { 0 }
    pub fn recorded(&self) -> usize { 0 }
}

#[cfg(not(feature = "metrics"))]
pub const MAX_HISTORY: usize = 240;

#[cfg(not(feature = "metrics"))]
pub struct RingBuffer<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RingBuffer<T> {
    pub fn new(_capacity: usize) -> Self { Self(std::marker::PhantomData) }
    pub fn push(&mut self, _value: T) {}
    pub fn len(&self) -> usize { 0 }
    pub fn is_empty(&self) -> bool { true }
}

#[cfg(not(feature = "metrics"))]
#[derive(Default)]
pub struct SystemProfiler;

#[cfg(not(feature = "metrics"))]
impl SystemProfiler {
    pub fn new() -> Self { Self }
    pub fn time_system<F, R>(&mut self, _name: &str, f: F) -> R where F: FnOnce() -> R { f() }
    pub fn get_timing(&self, _name: &str) -> std::time::Duration { std::time::Duration::ZERO }
    pub fn slowest(&self) -> Option<(&str, std::time::Duration)> { None }
    pub fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_profiler_runs_closure() {
        let mut profiler = super::SystemProfiler::new();
        let value = profiler.time_system("movement", || 21 * 2);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_frame_timer_never_exceeds_budget() {
        let budget = std::time::Duration::from_millis(50);
        let mut timer = super::FrameTimer::new(budget, 4);
        timer.begin();
        let remaining = timer.end();
        assert!(remaining <= budget);
        assert_eq!(timer.budget(), budget);
    }
}
