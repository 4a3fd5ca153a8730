//! Drawing surface abstraction
//!
//! The draw pass only needs a colour and filled rectangles. Windowed
//! backends implement [`Surface`]; [`RecordingSurface`] keeps the commands
//! in memory for headless runs and tests.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Target of the draw pass.
pub trait Surface {
    fn set_color(&mut self, color: Color);

    /// Fill an axis-aligned rectangle given by its top-left corner and size.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Draw a line of text with its baseline starting at (x, y). Surfaces
    /// without text support ignore it.
    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32) {}
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
    },
}

/// Surface that records every command of the current frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Start a new frame: drop recorded commands and fill the whole surface.
    pub fn clear(&mut self, background: Color) {
        self.commands.clear();
        self.set_color(background);
        self.fill_rect(0, 0, self.width, self.height);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Filled rectangles of the current frame, in draw order.
    pub fn filled_rects(&self) -> impl Iterator<Item = (i32, i32, i32, i32)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
            } => Some((x, y, width, height)),
            _ => None,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Surface for RecordingSurface {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}

/// Draws onto another surface with every coordinate multiplied by an
/// integer factor, mapping playfield units to output pixels.
pub struct ScaledSurface<'a> {
    inner: &'a mut dyn Surface,
    scale: i32,
}

impl<'a> ScaledSurface<'a> {
    pub fn new(inner: &'a mut dyn Surface, scale: i32) -> Self {
        Self {
            inner,
            scale: scale.max(1),
        }
    }
}

impl Surface for ScaledSurface<'_> {
    fn set_color(&mut self, color: Color) {
        self.inner.set_color(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let s = self.scale;
        self.inner.fill_rect(x * s, y * s, width * s, height * s);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.inner.draw_text(text, x * self.scale, y * self.scale);
    }
}
