//! A surface that records draw calls instead of rasterizing them

use super::{Color, Surface};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, width: f32, height: f32, color: Color },
    Circle { x: f32, y: f32, radius: f32, color: Color },
    Text { x: f32, y: f32, text: String, color: Color },
    Image { image: String, x: f32, y: f32 },
    RotatedImage { image: String, x: f32, y: f32, angle: f32 },
}

/// Records every call made in a frame; images are identified by name
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Drop recorded commands (start of a new frame)
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    type Image = String;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, width, height, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    fn draw_image(&mut self, image: &String, x: f32, y: f32) {
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            x,
            y,
        });
    }

    fn draw_image_rotated(&mut self, image: &String, x: f32, y: f32, angle: f32) {
        self.commands.push(DrawCommand::RotatedImage {
            image: image.clone(),
            x,
            y,
            angle,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_covers_surface() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        surface.clear(Color::Black);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
                color: Color::Black
            }]
        );
        surface.fill_text(1.0, 2.0, "hi", Color::Yellow);
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["hi"]);
        surface.reset();
        assert!(surface.commands.is_empty());
    }
}
