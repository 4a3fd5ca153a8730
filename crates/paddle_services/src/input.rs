//! Pointer input shared between the driver and gameplay systems

use paddle_core::math::DVec2;
use std::cell::Cell;
use std::rc::Rc;

/// Cursor position in playfield coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub pointer_x: f64,
    pub pointer_y: f64,
}

impl InputState {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.pointer_x, self.pointer_y)
    }
}

/// Shared handle to the latest pointer state.
///
/// The driver writes it once per tick before the update pass; systems read
/// it. Everything runs on the driver's thread, so a plain `Rc<Cell>` is
/// enough.
#[derive(Debug, Clone, Default)]
pub struct Pointer {
    state: Rc<Cell<InputState>>,
}

impl Pointer {
    pub fn new(initial: DVec2) -> Self {
        let pointer = Self::default();
        pointer.set(initial);
        pointer
    }

    pub fn set(&self, position: DVec2) {
        self.state.set(InputState {
            pointer_x: position.x,
            pointer_y: position.y,
        });
    }

    /// Store a cursor position given in output pixels, mapping it back to
    /// playfield units.
    pub fn set_scaled(&self, window: DVec2, scale: u32) {
        self.set(window / f64::from(scale.max(1)));
    }

    pub fn state(&self) -> InputState {
        self.state.get()
    }

    pub fn position(&self) -> DVec2 {
        self.state.get().position()
    }
}
