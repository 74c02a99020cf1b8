//! Immediate-mode drawing surface
//!
//! Games draw through the [`Surface`] trait and never see how pixels are
//! produced. The browser build draws onto a 2D canvas; tests and the native
//! demo record the calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};

/// Named fill colours used by the games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Gray,
}

impl Color {
    /// CSS colour name
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Gray => "gray",
        }
    }
}

/// Something the games can draw onto
pub trait Surface {
    /// Backend image handle
    type Image;

    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);
    /// Text with its bottom-left corner at (x, y)
    fn fill_text(&mut self, x: f32, y: f32, text: &str, color: Color);
    /// Image with its top-left corner at (x, y)
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32);
    /// Image centred on (center_x, center_y), rotated about its centre
    fn draw_image_rotated(&mut self, image: &Self::Image, center_x: f32, center_y: f32, angle: f32);

    /// Fill the whole surface
    fn clear(&mut self, color: Color) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0.0, 0.0, w, h, color);
    }
}
