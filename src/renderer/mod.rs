//! Drawing surface boundary
//!
//! The simulation only ever clears the frame and fills rectangles, so that is
//! the whole interface. The browser host draws onto a 2D canvas; tests and the
//! headless demo record the calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Player
    Red,
    /// Obstacles
    Blue,
}

impl Color {
    /// CSS color name
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

/// Something the game can draw onto
pub trait Surface {
    /// Wipe the region `(0, 0, width, height)`
    fn clear(&mut self, width: f32, height: f32);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self, width: f32, height: f32) {
        (**self).clear(width, height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    FillRect { rect: Rect, color: Color },
}

/// Surface that keeps every call it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded calls (call between frames to keep memory flat)
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// Rectangles filled with the given color, in draw order
    pub fn filled(&self, color: Color) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Number of clear calls recorded
    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Clear { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }
}
