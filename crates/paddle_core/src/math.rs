//! Deterministic math utilities
//!
//! Re-exports glam, plus the rectangle type used for bounds and a seeded
//! pseudo-random generator so runs can be replayed exactly.

pub use glam::*;

/// Axis-aligned rectangle stored as centre and full size.
///
/// Edge setters move the rectangle; they never resize it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub const fn new(center: DVec2, size: DVec2) -> Self {
        Self { center, size }
    }

    /// Rectangle with its top-left corner at `origin`.
    pub fn from_top_left(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin + size / 2.0, size)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.size.y / 2.0
    }

    pub fn set_left(&mut self, left: f64) {
        self.center.x = left + self.size.x / 2.0;
    }

    pub fn set_right(&mut self, right: f64) {
        self.center.x = right - self.size.x / 2.0;
    }

    pub fn set_top(&mut self, top: f64) {
        self.center.y = top + self.size.y / 2.0;
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.center.y = bottom - self.size.y / 2.0;
    }

    /// Keep the rectangle within `[min, max]` horizontally. Returns whether
    /// it had to be moved.
    pub fn limit_x(&mut self, min: f64, max: f64) -> bool {
        let mut changed = false;
        if self.left() < min {
            self.set_left(min);
            changed = true;
        }
        if self.right() > max {
            self.set_right(max);
            changed = true;
        }
        changed
    }

    /// Keep the rectangle within `[min, max]` vertically. Returns whether it
    /// had to be moved.
    pub fn limit_y(&mut self, min: f64, max: f64) -> bool {
        let mut changed = false;
        if self.top() < min {
            self.set_top(min);
            changed = true;
        }
        if self.bottom() > max {
            self.set_bottom(max);
            changed = true;
        }
        changed
    }

    /// Keep the rectangle within the box spanned by `min` and `max`.
    pub fn limit(&mut self, min: DVec2, max: DVec2) -> bool {
        let x_changed = self.limit_x(min.x, max.x);
        let y_changed = self.limit_y(min.y, max.y);
        x_changed || y_changed
    }

    /// Whether the interiors overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && self.right() >= other.right()
            && self.top() <= other.top()
            && self.bottom() >= other.bottom()
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        (self.left()..=self.right()).contains(&point.x)
            && (self.top()..=self.bottom()).contains(&point.y)
    }
}

/// Deterministic pseudo-random generator (32-bit LCG).
pub struct DeterministicRng {
    seed: u64,
    state: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self { seed, state: seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u32(&mut self) -> u32 {
        // LCG constants
        const A: u64 = 1664525;
        const C: u64 = 1013904223;
        const M: u64 = 1u64 << 32;

        self.state = (A.wrapping_mul(self.state).wrapping_add(C)) % M;
        self.state as u32
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Fair coin flip.
    pub fn next_bool(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}
